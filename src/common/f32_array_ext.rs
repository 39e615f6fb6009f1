//! `[f32]` extensions.

use micromath::F32Ext;

/// `[f32]` extensions for characterizing error signals and coefficient vectors.
pub trait F32ArrayExt {
    /// Returns the maximum absolute value, or NaN if any value is NaN.
    fn peak_level(&self) -> f32;
    /// Returns the mean of the squared values, i.e the signal power.
    fn mean_square(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level.
    fn rms_level(&self) -> f32;
}

impl F32ArrayExt for [f32] {
    fn peak_level(&self) -> f32 {
        self.iter().fold(0.0, |max, sample| {
            let value = F32Ext::abs(*sample);
            if value.is_nan() || value > max {
                value
            } else {
                max
            }
        })
    }

    fn mean_square(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.iter().map(|sample| sample * sample).sum();
        sum / (self.len() as f32)
    }

    fn rms_level(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        F32Ext::sqrt(self.mean_square())
    }
}
