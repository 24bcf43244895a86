use serde::{Serialize, Deserialize};

/// Per-update statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the loop
/// sends one `StepStats` value after every weight update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepStats {
    /// 1-based update number.
    pub iteration: usize,
    /// Error that drove this update (-1 or 1).
    pub error: i8,
    /// Weighted sum after the update was applied.
    pub weighted_sum: f64,
}

/// Result of a converged training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainOutcome {
    pub weights: Vec<f64>,
    /// Number of weight updates performed; 0 if already converged.
    pub updates: usize,
}
