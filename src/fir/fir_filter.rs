use alloc::boxed::Box;

use super::fir;
use crate::common::DelayLine;

/// A [FIR](https://en.wikipedia.org/wiki/Finite_impulse_response) filter with its own
/// input history, e.g a model of a primary or secondary acoustic path.
pub struct FirFilter {
    /// Filter coefficients [b0, b1, ..., b_{N-1}]
    coeffs: Box<[f32]>,
    /// Most recent input values. Newest sample is at index 0.
    x: DelayLine,
}

impl FirFilter {
    pub fn new(coeffs: &[f32]) -> Self {
        FirFilter {
            coeffs: coeffs.into(),
            x: DelayLine::new(coeffs.len()),
        }
    }

    pub fn coeffs(&self) -> &[f32] {
        &self.coeffs
    }

    /// Most recent input samples, newest first.
    pub fn history(&self) -> &[f32] {
        self.x.as_slice()
    }

    /// Feeds one input sample and returns the corresponding output sample.
    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        self.x.push(x);
        fir(self.x.as_slice(), &self.coeffs)
    }

    pub fn process_buffer(&mut self, input: &[f32], output: &mut [f32]) {
        if input.len() != output.len() {
            panic!("FIR filter input and output buffers must have the same size");
        }
        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = self.process(*x);
        }
    }

    pub fn reset(&mut self) {
        self.x.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::FirFilter;

    #[test]
    fn test_passthrough() {
        let mut filter = FirFilter::new(&[1.0]);
        assert_eq!(filter.process(5.0), 5.0);
        assert_eq!(filter.process(-2.0), -2.0);
    }

    #[test]
    fn test_moving_average() {
        let mut filter = FirFilter::new(&[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
        assert!((filter.process(3.0) - 1.0).abs() < 1e-6);
        assert!((filter.process(6.0) - 3.0).abs() < 1e-6);
        assert!((filter.process(9.0) - 6.0).abs() < 1e-6);
        assert!((filter.process(0.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_pure_delay() {
        let mut filter = FirFilter::new(&[0.0, 0.0, 1.0]);
        let input = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut output = [0.0; 5];
        filter.process_buffer(&input, &mut output);
        assert_eq!(output, [0.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(filter.history(), &[5.0, 4.0, 3.0]);
    }

    #[test]
    fn test_empty_coeffs() {
        let mut filter = FirFilter::new(&[]);
        assert_eq!(filter.process(1.0), 0.0);
        assert_eq!(filter.history().len(), 0);
    }

    #[test]
    fn test_reset() {
        let mut filter = FirFilter::new(&[1.0, 0.5]);
        filter.process(10.0);
        filter.reset();
        assert_eq!(filter.history(), &[0.0, 0.0]);
        assert_eq!(filter.process(2.0), 2.0);
    }

    #[test]
    #[should_panic]
    fn test_buffer_size_mismatch() {
        let mut filter = FirFilter::new(&[1.0]);
        let mut output = [0.0; 2];
        filter.process_buffer(&[1.0, 2.0, 3.0], &mut output);
    }
}
