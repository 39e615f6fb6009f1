//! A rust implementation of the [filtered-x least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! (FXLMS) adaptive filter, the workhorse of active noise control (ANC) and active
//! vibration control.
//!
//! An FXLMS filter synthesizes a canceling signal from a reference signal correlated
//! with an unwanted disturbance. The canceling signal reaches the error sensor through a
//! physical secondary path (loudspeaker, air, microphone), so the filter adapts its
//! coefficients using the reference passed through an estimate of that path, the
//! "filtered-x", instead of the raw reference.
//!
//! Features
//! * Two-phase per sample API that leaves the physical (or simulated) secondary path
//! to the caller.
//! * No allocations after construction, constant work per sample, suitable for real time audio use.
//! * `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use microanc::fir::FirFilter;
//! use microanc::fxlms::FxlmsFilter;
//!
//! // The physical secondary path. Here it is known exactly, so it doubles as the estimate.
//! let secondary_path = [0.5, 0.3, 0.2];
//! let mut secondary = FirFilter::new(&secondary_path);
//! let mut filter = FxlmsFilter::from_options(8, 0.01, &secondary_path).unwrap();
//!
//! let reference = [1.0, 0.5, -0.2, 0.3, -0.7, 0.6, 0.1, -0.3, 0.4, -0.5];
//! let disturbance = [0.9, 0.4, -0.1, 0.2, -0.6, 0.55, 0.05, -0.25, 0.35, -0.45];
//! for (x, d) in reference.iter().zip(disturbance.iter()) {
//!     // Phase 1: produce the canceling signal.
//!     let y = filter.compute_output(*x);
//!     // The canceling signal travels through the secondary path to the error sensor.
//!     let e = *d - secondary.process(y);
//!     // Phase 2: adapt using the sensed error.
//!     filter.update_weights(e);
//! }
//! assert_eq!(filter.weights().len(), 8);
//! ```

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod common;
mod error;
pub mod fir;
pub mod fxlms;

pub use error::{Error, Result};
