use std::path::Path;

/// Reads a 16 bit wav file. Returns the channel count and the interleaved
/// samples scaled to [-1, 1].
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(u16, Vec<f32>), hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let scale = 1. / (i16::MAX as f32);
    let samples = reader
        .samples::<i16>()
        .map(|sample| sample.map(|s| (s as f32) * scale))
        .collect::<Result<Vec<f32>, hound::Error>>()?;
    Ok((reader.spec().channels, samples))
}

/// Writes samples as a 16 bit wav file. Samples outside [-1, 1] are clamped.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    sample_rate: u32,
    channel_count: u16,
    buffer: &[f32],
) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: channel_count,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    let amplitude = i16::MAX as f32;
    for sample in buffer.iter() {
        let clamped_sample = sample.max(-1.0).min(1.0);
        writer.write_sample((clamped_sample * amplitude) as i16)?;
    }
    writer.finalize()
}
