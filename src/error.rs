use thiserror::Error;

/// Precondition violations, raised synchronously by the call that breaks them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidArgument {
    #[error("Input vector is empty. A perceptron needs at least one input.")]
    EmptyInputs,

    #[error("Input at index {index} is not a finite number.")]
    NonFiniteInput { index: usize },

    #[error("Learning rate must be a finite number greater than zero, got {0}.")]
    NonPositiveLearningRate(f64),

    #[error("Target label must be 0 or 1, got {0}.")]
    InvalidTarget(u8),

    #[error("Expected a vector of length {expected}, got {actual}.")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Weight at index {index} is not a finite number.")]
    NonFiniteWeight { index: usize },

    #[error("Iteration bound must be at least 1.")]
    ZeroIterations,
}

#[derive(Error, Debug)]
pub enum PerceptronError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// The weights are left at their last computed value, not reverted.
    #[error("Training did not converge after {iterations} weight updates.")]
    TrainingDidNotConverge { iterations: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
