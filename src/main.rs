// Demo: train a single perceptron on one example.
//   cargo run -- [path/to/spec.json]
// Log level comes from PERCEPTRON_LOG (error|warn|info|debug|trace).
use std::process::ExitCode;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use perceptron_nn::{Perceptron, PerceptronSpec, Result, TrainConfig, train_loop};

const DEMO_SEED: u64 = 42;
const DEMO_INPUTS: [f64; 2] = [2.0, 3.0];
const DEMO_TARGET: u8 = 1;

fn main() -> ExitCode {
    let log_level = std::env::var("PERCEPTRON_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(spec_path: Option<String>) -> Result<()> {
    let spec = match spec_path {
        Some(path) => {
            info!(path = %path, "loading perceptron spec");
            PerceptronSpec::load_json(&path)?
        }
        None => PerceptronSpec { seed: Some(DEMO_SEED), ..PerceptronSpec::default() },
    };

    let mut perceptron: Perceptron = spec.build(DEMO_INPUTS.to_vec())?;
    println!("Inputs:          {:?}", perceptron.inputs());
    println!("Initial weights: {:?}", perceptron.weights());
    println!("Initial output:  {}", perceptron.activation());

    let outcome = train_loop(&mut perceptron, DEMO_TARGET, &TrainConfig::new(spec.max_iterations))?;
    info!(updates = outcome.updates, "training finished");

    println!("Final weights:   {:?}", outcome.weights);
    println!("Final output:    {} (target {DEMO_TARGET})", perceptron.activation());
    Ok(())
}
