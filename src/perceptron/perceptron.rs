use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::activation::step::{step, validate_target, BinaryLabel};
use crate::error::{InvalidArgument, Result};
use crate::math::vector::{dot, scaled_add, uniform, with_bias};
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Learning rate used when the caller has no preference.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// A single artificial neuron with a step activation, trained on one
/// example at a time.
///
/// `biased_inputs` is always `inputs` followed by the bias input, and
/// `weights` always has one entry per biased input.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    inputs: Vec<f64>,
    biased_inputs: Vec<f64>,
    weights: Vec<f64>,
    learning_rate: f64,
}

impl Perceptron {
    /// Builds a perceptron with weights drawn from the thread-local RNG.
    pub fn new(inputs: Vec<f64>, learning_rate: f64) -> Result<Perceptron> {
        Perceptron::with_rng(inputs, learning_rate, &mut rand::thread_rng())
    }

    /// Builds a perceptron whose initial weights are reproducible from `seed`.
    pub fn with_seed(inputs: Vec<f64>, learning_rate: f64, seed: u64) -> Result<Perceptron> {
        Perceptron::with_rng(inputs, learning_rate, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Builds a perceptron with N+1 weights sampled uniformly from [-1, 1).
    pub fn with_rng<R: Rng + ?Sized>(
        inputs: Vec<f64>,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Perceptron> {
        check_inputs(&inputs)?;
        check_learning_rate(learning_rate)?;

        let biased_inputs = with_bias(&inputs);
        let weights = uniform(biased_inputs.len(), rng);
        trace!(inputs = inputs.len(), learning_rate, "perceptron initialized");

        Ok(Perceptron { inputs, biased_inputs, weights, learning_rate })
    }

    /// Builds a perceptron from an explicit weight vector (bias weight last).
    pub fn from_weights(inputs: Vec<f64>, weights: Vec<f64>, learning_rate: f64) -> Result<Perceptron> {
        check_inputs(&inputs)?;
        check_learning_rate(learning_rate)?;

        let biased_inputs = with_bias(&inputs);
        if weights.len() != biased_inputs.len() {
            return Err(InvalidArgument::DimensionMismatch {
                expected: biased_inputs.len(),
                actual: weights.len(),
            }.into());
        }
        if let Some(index) = weights.iter().position(|w| !w.is_finite()) {
            return Err(InvalidArgument::NonFiniteWeight { index }.into());
        }

        Ok(Perceptron { inputs, biased_inputs, weights, learning_rate })
    }

    pub fn inputs(&self) -> &[f64] { &self.inputs }

    pub fn biased_inputs(&self) -> &[f64] { &self.biased_inputs }

    pub fn weights(&self) -> &[f64] { &self.weights }

    pub fn learning_rate(&self) -> f64 { self.learning_rate }

    /// Number of real inputs, excluding the bias.
    pub fn input_len(&self) -> usize { self.inputs.len() }

    /// Swaps in a new example of the same length. Weights are kept.
    pub fn set_inputs(&mut self, inputs: Vec<f64>) -> Result<()> {
        check_inputs(&inputs)?;
        if inputs.len() != self.inputs.len() {
            return Err(InvalidArgument::DimensionMismatch {
                expected: self.inputs.len(),
                actual: inputs.len(),
            }.into());
        }
        self.biased_inputs = with_bias(&inputs);
        self.inputs = inputs;
        Ok(())
    }

    /// Σ biased_inputs[i] * weights[i].
    pub fn weighted_sum(&self) -> f64 {
        dot(&self.biased_inputs, &self.weights)
    }

    /// Step activation of the weighted sum; a sum of exactly zero yields 0.
    pub fn activation(&self) -> BinaryLabel {
        step(self.weighted_sum())
    }

    /// `target - activation()`, always one of -1, 0 or 1.
    pub fn error(&self, target: u8) -> Result<i8> {
        let target = validate_target(target)?;
        Ok(target as i8 - self.activation() as i8)
    }

    /// Applies one step of the perceptron learning rule and returns the new weights.
    pub fn update_weights(&mut self, target: u8) -> Result<&[f64]> {
        let error = self.error(target)?;
        self.apply_update(error);
        Ok(&self.weights)
    }

    /// Repeats `update_weights` until the prediction matches `target`.
    ///
    /// At most `max_iterations` updates are made. On
    /// [`TrainingDidNotConverge`](crate::PerceptronError::TrainingDidNotConverge)
    /// the weights keep their last computed value.
    pub fn train(&mut self, target: u8, max_iterations: usize) -> Result<Vec<f64>> {
        let outcome = train_loop(self, target, &TrainConfig::new(max_iterations))?;
        Ok(outcome.weights)
    }

    /// w ← w + lr * error * x, computed from the pre-update weights.
    pub(crate) fn apply_update(&mut self, error: i8) {
        let scale = self.learning_rate * error as f64;
        self.weights = scaled_add(&self.weights, &self.biased_inputs, scale);
    }
}

fn check_inputs(inputs: &[f64]) -> std::result::Result<(), InvalidArgument> {
    if inputs.is_empty() {
        return Err(InvalidArgument::EmptyInputs);
    }
    match inputs.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(InvalidArgument::NonFiniteInput { index }),
        None => Ok(()),
    }
}

pub(crate) fn check_learning_rate(learning_rate: f64) -> std::result::Result<(), InvalidArgument> {
    if learning_rate.is_finite() && learning_rate > 0.0 {
        Ok(())
    } else {
        Err(InvalidArgument::NonPositiveLearningRate(learning_rate))
    }
}
