use serde::{Deserialize, Serialize};

use crate::error::{InvalidArgument, Result};
use crate::perceptron::perceptron::{check_learning_rate, Perceptron, DEFAULT_LEARNING_RATE};

/// Default bound on weight updates per training call.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Serializable configuration for building and training a perceptron.
///
/// Holds hyperparameters only; trained weights are never stored here.
/// Missing JSON fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptronSpec {
    pub learning_rate: f64,
    /// Seed for weight initialization. `None` draws from the thread-local RNG.
    pub seed: Option<u64>,
    pub max_iterations: usize,
}

impl Default for PerceptronSpec {
    fn default() -> Self {
        PerceptronSpec {
            learning_rate: DEFAULT_LEARNING_RATE,
            seed: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PerceptronSpec {
    pub fn validate(&self) -> Result<()> {
        check_learning_rate(self.learning_rate)?;
        if self.max_iterations == 0 {
            return Err(InvalidArgument::ZeroIterations.into());
        }
        Ok(())
    }

    /// Builds a perceptron for `inputs` with this spec's learning rate and seed.
    pub fn build(&self, inputs: Vec<f64>) -> Result<Perceptron> {
        self.validate()?;
        match self.seed {
            Some(seed) => Perceptron::with_seed(inputs, self.learning_rate, seed),
            None => Perceptron::new(inputs, self.learning_rate),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<PerceptronSpec> {
        let spec: PerceptronSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a spec from a JSON file.
    pub fn load_json(path: &str) -> Result<PerceptronSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: PerceptronSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}
