use tracing::{debug, warn};

use crate::activation::step::validate_target;
use crate::error::{InvalidArgument, PerceptronError, Result};
use crate::perceptron::perceptron::Perceptron;
use crate::train::step_stats::{StepStats, TrainOutcome};
use crate::train::train_config::TrainConfig;

/// Trains `perceptron` toward `target` until its error reaches zero.
///
/// Each iteration checks the error first and stops as soon as it is zero,
/// so a perceptron that already predicts `target` is left untouched.
/// Otherwise one weight update is applied per iteration, up to
/// `config.max_iterations` updates.
///
/// # Errors
/// - `InvalidArgument` if `target` is not 0/1 or `max_iterations` is 0
/// - `TrainingDidNotConverge` if the bound is reached with a non-zero
///   error; the weights keep their last computed value
pub fn train_loop(
    perceptron: &mut Perceptron,
    target: u8,
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    let target = validate_target(target)?;
    if config.max_iterations == 0 {
        return Err(InvalidArgument::ZeroIterations.into());
    }

    let mut updates = 0;
    loop {
        let error = perceptron.error(target)?;
        if error == 0 {
            debug!(updates, weighted_sum = perceptron.weighted_sum(), "perceptron converged");
            return Ok(TrainOutcome {
                weights: perceptron.weights().to_vec(),
                updates,
            });
        }

        if updates == config.max_iterations {
            warn!(
                iterations = updates,
                weighted_sum = perceptron.weighted_sum(),
                "training stopped at iteration bound without converging"
            );
            return Err(PerceptronError::TrainingDidNotConverge { iterations: updates });
        }

        perceptron.apply_update(error);
        updates += 1;

        let weighted_sum = perceptron.weighted_sum();
        debug!(iteration = updates, error, weighted_sum, "weights updated");

        if let Some(ref tx) = config.progress_tx {
            // Receiver gone: nobody is listening, keep training.
            let _ = tx.send(StepStats { iteration: updates, error, weighted_sum });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn already_correct_means_zero_updates() {
        let mut p = Perceptron::from_weights(vec![1.0], vec![1.0, 1.0], 0.1).unwrap();
        let outcome = train_loop(&mut p, 1, &TrainConfig::new(10)).unwrap();
        assert_eq!(outcome.updates, 0);
        assert_eq!(outcome.weights, vec![1.0, 1.0]);
    }

    #[test]
    fn converges_and_counts_updates() {
        // sum = 2*0.5 + 3*(-0.5) + 0.1 = -0.4; each update adds 0.1 * (4 + 9 + 1) = 1.4.
        let mut p = Perceptron::from_weights(vec![2.0, 3.0], vec![0.5, -0.5, 0.1], 0.1).unwrap();
        let outcome = train_loop(&mut p, 1, &TrainConfig::new(10)).unwrap();
        assert_eq!(outcome.updates, 1);
        assert_eq!(p.activation(), 1);
        assert_eq!(outcome.weights, p.weights());
    }

    #[test]
    fn learns_target_zero() {
        let mut p = Perceptron::from_weights(vec![1.0, 1.0], vec![0.3, 0.3, 0.3], 0.1).unwrap();
        train_loop(&mut p, 0, &TrainConfig::new(100)).unwrap();
        assert_eq!(p.activation(), 0);
    }

    #[test]
    fn reports_each_update_on_progress_channel() {
        let (tx, rx) = mpsc::channel();
        let mut p = Perceptron::from_weights(vec![1.0], vec![-1.0, -1.0], 0.25).unwrap();
        let config = TrainConfig::new(50).with_progress(tx);
        let outcome = train_loop(&mut p, 1, &config).unwrap();
        drop(config);

        let stats: Vec<StepStats> = rx.iter().collect();
        assert_eq!(stats.len(), outcome.updates);
        assert!(stats.iter().all(|s| s.error == 1));
        assert_eq!(stats.last().map(|s| s.iteration), Some(outcome.updates));
        assert!(stats.last().map(|s| s.weighted_sum > 0.0).unwrap_or(false));
    }

    #[test]
    fn dropped_receiver_does_not_stop_training() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut p = Perceptron::from_weights(vec![1.0], vec![-1.0, -1.0], 0.25).unwrap();
        let outcome = train_loop(&mut p, 1, &TrainConfig::new(50).with_progress(tx)).unwrap();
        assert!(outcome.updates > 1);
        assert_eq!(p.activation(), 1);
    }

    #[test]
    fn zero_bound_is_rejected() {
        let mut p = Perceptron::from_weights(vec![1.0], vec![1.0, 1.0], 0.1).unwrap();
        assert!(matches!(
            train_loop(&mut p, 1, &TrainConfig::new(0)),
            Err(PerceptronError::InvalidArgument(InvalidArgument::ZeroIterations))
        ));
    }

    #[test]
    fn invalid_target_is_rejected_before_training() {
        let mut p = Perceptron::from_weights(vec![1.0], vec![-1.0, -1.0], 0.1).unwrap();
        assert!(matches!(
            train_loop(&mut p, 2, &TrainConfig::new(5)),
            Err(PerceptronError::InvalidArgument(InvalidArgument::InvalidTarget(2)))
        ));
        assert_eq!(p.weights(), &[-1.0, -1.0]);
    }
}
