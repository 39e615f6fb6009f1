use dev_helpers::signal;
use microanc::fir::FirFilter;
use microanc::fxlms::FxlmsFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample_count = 1_000_000;
    let filter_length = 256;
    let step_size = 0.0005;
    let secondary_path = [0.0, 0.6, 0.25, 0.1, 0.05];
    let x = signal::white_noise(sample_count, 1.0, 1);
    let mut filter = FxlmsFilter::from_options(filter_length, step_size, &secondary_path)?;
    let mut secondary = FirFilter::new(&secondary_path);
    println!("Processing {} samples.", sample_count);
    println!(
        "Filter length {}, secondary path estimate length {}.",
        filter_length,
        secondary_path.len()
    );

    let start = std::time::Instant::now();
    for x in x.iter() {
        let y = filter.compute_output(*x);
        filter.update_weights(*x - secondary.process(y));
    }
    let time_us = start.elapsed().as_micros();
    println!(
        "Completed in {} μs ({} ns/sample).",
        time_us,
        1000 * time_us / (sample_count as u128)
    );
    println!("");
    println!("NOTE: This example is meant for profiling.");
    println!("For performance benchmarks, run 'cargo bench'.");

    Ok(())
}
