pub mod math;
pub mod activation;
pub mod perceptron;
pub mod train;
pub mod error;

// Convenience re-exports
pub use activation::step::{step, BinaryLabel};
pub use error::{InvalidArgument, PerceptronError, Result};
pub use perceptron::{Perceptron, PerceptronSpec, DEFAULT_LEARNING_RATE, DEFAULT_MAX_ITERATIONS};
pub use train::{train_loop, StepStats, TrainConfig, TrainOutcome};
