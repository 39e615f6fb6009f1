//! [Filtered-x least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! (FXLMS) adaptive filter for active noise control.
//!
//! Notation: x(n) is the reference signal, y(n) the canceling signal produced by
//! the filter, s the physical secondary path from the filter output to the
//! error sensor, d(n) the disturbance at the error sensor and
//! e(n) = d(n) - (s * y)(n) the residual error.
//!
//! Each sample is processed in two steps:
//! 1. [FxlmsFilter::compute_output] takes x(n) and returns y(n).
//! 2. The caller sends y(n) through the secondary path, senses e(n) and hands
//!    it to [FxlmsFilter::update_weights].
//!
//! # Examples
//! ## Noise cancellation through a secondary path
//!
//! The disturbance is white noise passed through a primary path p = s * w0, so
//! a filter with coefficients w0 cancels it completely. The secondary path
//! is known exactly and is used as the estimate.
//!
//! ```
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//! use microanc::common::F32ArrayExt;
//! use microanc::fir::FirFilter;
//! use microanc::fxlms::FxlmsFilter;
//!
//! let secondary_path = [0.5, 0.3, 0.2];
//! // s * [0.0, 1.0, -0.5]
//! let primary_path = [0.0, 0.5, 0.05, 0.05, -0.1];
//!
//! let mut primary = FirFilter::new(&primary_path);
//! let mut secondary = FirFilter::new(&secondary_path);
//! let mut filter = FxlmsFilter::from_options(4, 0.05, &secondary_path).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(123);
//! let mut e = vec![0.0; 20000];
//! for e in e.iter_mut() {
//!     let x: f32 = rng.gen_range(-1.0..=1.0);
//!     let d = primary.process(x);
//!     let y = filter.compute_output(x);
//!     *e = d - secondary.process(y);
//!     filter.update_weights(*e);
//! }
//!
//! // The residual error should be almost completely cancelled out
//! assert!(e[19000..].peak_level() < 1e-3);
//! // and the filter should have converged to w0.
//! let expected = [0.0, 1.0, -0.5, 0.0];
//! for (w, w0) in filter.weights().iter().zip(expected.iter()) {
//!     assert!((w - w0).abs() < 1e-3);
//! }
//! ```

mod fxlms_filter;

pub use fxlms_filter::{FxlmsFilter, DEFAULT_STEP_SIZE};
