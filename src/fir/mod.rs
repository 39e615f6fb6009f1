//! [Finite impulse response](https://en.wikipedia.org/wiki/Finite_impulse_response) evaluation.
//!
//! [fir] is the stateless building block used both inside the FXLMS filter and
//! by callers modeling physical paths. [FirFilter] pairs a set of coefficients
//! with its own delay line, which is convenient for simulating primary and
//! secondary paths.
//!
//! # Examples
//!
//! ```
//! use microanc::fir::{fir, FirFilter};
//!
//! // Delay line contents, newest sample first
//! assert_eq!(fir(&[1.0, 2.0, 3.0], &[0.5, 0.25]), 1.0);
//!
//! // y(n) = x(n) + 0.5 x(n - 1)
//! let mut path = FirFilter::new(&[1.0, 0.5]);
//! assert_eq!(path.process(2.0), 2.0);
//! assert_eq!(path.process(4.0), 5.0);
//! ```

mod fir_filter;

pub use fir_filter::FirFilter;

/// Computes `Σ coeffs[i] * delay_line[i]`, where `delay_line` holds the most
/// recent samples, newest first.
///
/// The sum runs over the shorter of the two slices, so mismatching lengths
/// are truncated rather than treated as an error. Empty input gives 0.
#[inline]
pub fn fir(delay_line: &[f32], coeffs: &[f32]) -> f32 {
    coeffs
        .iter()
        .zip(delay_line.iter())
        .fold(0.0, |sum, (c, x)| sum + c * x)
}
