use std::sync::mpsc;

use crate::train::step_stats::StepStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_iterations` : upper bound on weight updates before giving up
/// - `progress_tx`    : optional channel sender; one `StepStats` is sent per
///                      weight update. A dropped receiver does not stop
///                      training.
pub struct TrainConfig {
    pub max_iterations: usize,
    pub progress_tx: Option<mpsc::Sender<StepStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(max_iterations: usize) -> Self {
        TrainConfig {
            max_iterations,
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<StepStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}
