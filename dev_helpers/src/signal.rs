use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform white noise in [-amplitude, amplitude], reproducible for a given seed.
pub fn white_noise(sample_count: usize, amplitude: f32, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..sample_count)
        .map(|_| rng.gen_range(-amplitude..=amplitude))
        .collect()
}

/// A sum of sines at integer multiples of `fundamental`, e.g a motor or
/// transformer hum. `amplitudes[k]` is the amplitude of harmonic k + 1.
pub fn harmonic_tone(
    sample_rate: f32,
    fundamental: f32,
    amplitudes: &[f32],
    sample_count: usize,
) -> Vec<f32> {
    (0..sample_count)
        .map(|i| {
            let t = (i as f32) / sample_rate;
            amplitudes
                .iter()
                .enumerate()
                .map(|(k, a)| {
                    let f = fundamental * ((k + 1) as f32);
                    a * (2.0 * std::f32::consts::PI * f * t).sin()
                })
                .sum::<f32>()
        })
        .collect()
}
