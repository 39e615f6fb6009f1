use alloc::{boxed::Box, vec};

use crate::common::DelayLine;
use crate::fir::fir;
use crate::{Error, Result};

/// Step size used by [FxlmsFilter::new].
pub const DEFAULT_STEP_SIZE: f32 = 0.01;

/// An adaptive [filtered-x least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter) filter.
///
/// The weights are updated using the reference signal filtered through an estimate
/// of the secondary path, which keeps the gradient estimate aligned with the error
/// actually sensed downstream of that path. There is no step size normalization;
/// a step size that is too large for the reference signal power makes the weights
/// grow without bound.
#[derive(Debug, Clone)]
pub struct FxlmsFilter {
    /// Adaptive FIR filter coefficients
    w: Box<[f32]>,
    /// Most recent reference values. Newest sample is at index 0.
    x: DelayLine,
    /// Most recent reference values filtered through the secondary path estimate.
    /// Newest sample is at index 0.
    x_filtered: DelayLine,
    /// FIR model of the secondary path
    s_hat: Box<[f32]>,
    /// Step size
    μ: f32,
}

impl FxlmsFilter {
    /// Creates a filter with [DEFAULT_STEP_SIZE].
    pub fn new(filter_length: usize, secondary_path_estimate: &[f32]) -> Result<Self> {
        FxlmsFilter::from_options(filter_length, DEFAULT_STEP_SIZE, secondary_path_estimate)
    }

    /// Creates a filter with `filter_length` adaptive taps. Returns
    /// [Error::InvalidConfiguration] if `filter_length` is 0 or `step_size`
    /// is not finite.
    pub fn from_options(
        filter_length: usize,
        step_size: f32,
        secondary_path_estimate: &[f32],
    ) -> Result<Self> {
        if filter_length == 0 {
            log::warn!("Rejected FXLMS filter length 0");
            return Err(Error::InvalidConfiguration(
                "filter length must be greater than 0",
            ));
        }
        if !step_size.is_finite() {
            log::warn!("Rejected non-finite FXLMS step size {}", step_size);
            return Err(Error::InvalidConfiguration("step size must be finite"));
        }
        if secondary_path_estimate.len() > filter_length {
            // Taps beyond the reference history can never contribute.
            log::debug!(
                "Secondary path estimate has {} taps, only the first {} are used",
                secondary_path_estimate.len(),
                filter_length
            );
        }
        log::debug!(
            "Created FXLMS filter (length={}, μ={}, secondary path estimate length={})",
            filter_length,
            step_size,
            secondary_path_estimate.len()
        );

        Ok(FxlmsFilter {
            w: vec![0.0; filter_length].into_boxed_slice(),
            x: DelayLine::new(filter_length),
            x_filtered: DelayLine::new(filter_length),
            s_hat: secondary_path_estimate.into(),
            μ: step_size,
        })
    }

    pub fn filter_length(&self) -> usize {
        self.w.len()
    }

    pub fn step_size(&self) -> f32 {
        self.μ
    }

    pub fn secondary_path_estimate(&self) -> &[f32] {
        &self.s_hat
    }

    /// The adaptive filter coefficients.
    pub fn weights(&self) -> &[f32] {
        &self.w
    }

    /// Most recent reference samples, newest first.
    pub fn reference_history(&self) -> &[f32] {
        self.x.as_slice()
    }

    /// Most recent filtered reference samples, newest first.
    pub fn filtered_reference_history(&self) -> &[f32] {
        self.x_filtered.as_slice()
    }

    /// First half of a sample tick. Takes the reference sample x(n) and
    /// returns the canceling signal y(n), before it passes through the
    /// secondary path.
    #[inline]
    pub fn compute_output(&mut self, x: f32) -> f32 {
        self.x.push(x);

        // Filter x through the secondary path estimate to form the filtered-x
        let x_filtered = fir(self.x.as_slice(), &self.s_hat);
        self.x_filtered.push(x_filtered);

        fir(self.x.as_slice(), &self.w)
    }

    /// Second half of a sample tick. Adapts the weights given the error e(n)
    /// sensed after the output of [compute_output](FxlmsFilter::compute_output)
    /// went through the secondary path.
    #[inline]
    pub fn update_weights(&mut self, e: f32) {
        let delta_scale = self.μ * e;
        for (w, x_filtered) in self.w.iter_mut().zip(self.x_filtered.as_slice()) {
            *w += delta_scale * x_filtered;
        }
    }

    /// Clears the weights and the signal histories.
    pub fn reset(&mut self) {
        log::trace!("Resetting FXLMS filter");
        self.w.iter_mut().for_each(|w| *w = 0.0);
        self.x.reset();
        self.x_filtered.reset();
    }
}
