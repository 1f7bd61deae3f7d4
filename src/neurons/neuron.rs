use rand::prelude::*;

/// The single failure mode of forward evaluation: the input vector handed to
/// a neuron is not the same length as its weight vector. Inputs are never
/// truncated or zero-padded to fit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("number of input values ({got}) does not match number of weights ({expected})")]
    DimensionMismatch { got: usize, expected: usize },
}

/// A single weighted-sum unit: one weight per input dimension plus a bias.
///
/// The weight count is fixed at construction and determines the only input
/// length the neuron accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl Neuron {
    /// Creates a neuron with `weight_count` weights and a bias, each drawn
    /// independently and uniformly from [-1, 1).
    pub fn random<R: Rng>(weight_count: usize, rng: &mut R) -> Neuron {
        let weights = (0..weight_count)
            .map(|_| rng.gen::<f64>() * 2.0 - 1.0)
            .collect();
        let bias = rng.gen::<f64>() * 2.0 - 1.0;

        Neuron { weights, bias }
    }

    /// Creates a neuron from explicit parameters.
    pub fn from_parts(weights: Vec<f64>, bias: f64) -> Neuron {
        Neuron { weights, bias }
    }

    /// Computes `bias + dot(weights, inputs)`. No activation is applied.
    ///
    /// Fails with [`EvalError::DimensionMismatch`] when `inputs.len()` differs
    /// from the weight count.
    pub fn evaluate(&self, inputs: &[f64]) -> Result<f64, EvalError> {
        if inputs.len() != self.weights.len() {
            return Err(EvalError::DimensionMismatch {
                got: inputs.len(),
                expected: self.weights.len(),
            });
        }

        let weighted_sum: f64 = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w * x)
            .sum();

        Ok(weighted_sum + self.bias)
    }
}
