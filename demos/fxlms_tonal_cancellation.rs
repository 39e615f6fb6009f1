use dev_helpers::{signal, wav};
use microanc::common::F32ArrayExt;
use microanc::fir::FirFilter;
use microanc::fxlms::FxlmsFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    const SAMPLE_RATE: u32 = 8000;
    const DURATION_S: usize = 5;
    const FILTER_LENGTH: usize = 32;
    const MU: f32 = 0.005;
    const BLOCK_SIZE: usize = SAMPLE_RATE as usize / 2;

    // x, a hum at 120 Hz with harmonics picked up by a reference sensor
    // close to the noise source
    let x = signal::harmonic_tone(
        SAMPLE_RATE as f32,
        120.0,
        &[0.5, 0.25, 0.12],
        DURATION_S * SAMPLE_RATE as usize,
    );

    // Acoustic paths to the error microphone. The primary path is a delayed,
    // smeared copy of the source, the secondary path a short delay from the
    // loudspeaker.
    let primary_path = [0.0, 0.0, 0.0, 0.6, 0.3, 0.1, -0.05];
    let secondary_path = [0.0, 0.7, 0.2, 0.05];
    // A slightly wrong secondary path estimate, as obtained by offline identification
    let secondary_path_estimate = [0.0, 0.65, 0.22, 0.04];

    println!("Filtering (μ={MU}, length={FILTER_LENGTH})");
    println!("");

    let mut filter = FxlmsFilter::from_options(FILTER_LENGTH, MU, &secondary_path_estimate)?;
    let mut primary = FirFilter::new(&primary_path);
    let mut secondary = FirFilter::new(&secondary_path);

    // d, the hum at the error microphone without cancellation
    let mut d = vec![0.0; x.len()];
    primary.process_buffer(&x, &mut d);

    // e, the residual hum at the error microphone
    let mut e = Vec::with_capacity(x.len());
    for (x, d) in x.iter().zip(d.iter()) {
        let y = filter.compute_output(*x);
        let e_n = *d - secondary.process(y);
        filter.update_weights(e_n);
        e.push(e_n);
    }

    println!("Time (s)    d(n) RMS    e(n) RMS    Attenuation");
    println!("-------------------------------------------------");
    for (i, (d_block, e_block)) in d.chunks(BLOCK_SIZE).zip(e.chunks(BLOCK_SIZE)).enumerate() {
        let d_rms = d_block.rms_level();
        let e_rms = e_block.rms_level();
        println!(
            "{:<8.1}    {:.5}     {:.5}     {:>6.1} dB",
            (i * BLOCK_SIZE) as f32 / SAMPLE_RATE as f32,
            d_rms,
            e_rms,
            20. * (d_rms / e_rms).log10()
        );
    }
    println!("");

    let d_output_path = "example_data/fxlms_tonal_cancellation_d.wav";
    let e_output_path = "example_data/fxlms_tonal_cancellation_e.wav";
    std::fs::create_dir_all("example_data")?;
    wav::write_wav(d_output_path, SAMPLE_RATE, 1, &d)?;
    wav::write_wav(e_output_path, SAMPLE_RATE, 1, &e)?;

    println!("Wrote output signals");
    println!("d(n) -> {}", d_output_path);
    println!("e(n) -> {}", e_output_path);

    Ok(())
}
