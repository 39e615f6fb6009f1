use microanc::common::F32ArrayExt;
use microanc::fir::FirFilter;
use microanc::fxlms::FxlmsFilter;
use serde::Serialize;

#[derive(Serialize)]
struct Summary<'a> {
    filter_length: usize,
    step_size: f32,
    secondary_path: &'a [f32],
    final_weights: &'a [f32],
    error_rms: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    const FILTER_LENGTH: usize = 8;
    const MU: f32 = 0.01;

    // Physical secondary path, assumed to be perfectly identified.
    let secondary_path = [0.5, 0.3, 0.2];
    // Physical primary path from the noise source to the error sensor.
    let primary_path = [0.9, 0.0, 0.1];

    // x, the reference signal
    let x = [1.0, 0.5, -0.2, 0.3, -0.7, 0.6, 0.1, -0.3, 0.4, -0.5];

    println!("Filtering (μ={MU}, length={FILTER_LENGTH})");
    println!("s = {:?}", secondary_path);
    println!("p = {:?}", primary_path);
    println!("");

    let mut filter = FxlmsFilter::from_options(FILTER_LENGTH, MU, &secondary_path)?;
    let mut primary = FirFilter::new(&primary_path);
    let mut secondary = FirFilter::new(&secondary_path);

    let mut e = vec![];
    for (n, x) in x.iter().enumerate() {
        // d, the disturbance at the error sensor
        let d = primary.process(*x);
        // y, the canceling signal before it reaches the secondary path
        let y = filter.compute_output(*x);
        let e_n = d - secondary.process(y);
        filter.update_weights(e_n);
        e.push(e_n);

        println!(
            "n={:<3} x={:>6.3} d={:>6.3} y={:>9.6} e={:>9.6}",
            n, x, d, y, e_n
        );
    }

    println!("");
    println!("Final weights: {:?}", filter.weights());
    println!("");

    let summary = Summary {
        filter_length: filter.filter_length(),
        step_size: filter.step_size(),
        secondary_path: filter.secondary_path_estimate(),
        final_weights: filter.weights(),
        error_rms: e.rms_level(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
