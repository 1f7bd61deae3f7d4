use rand::prelude::*;

use crate::neurons::neuron::{EvalError, Neuron};

/// An ordered group of neurons that all consume the same input vector and
/// together produce one output vector, one scalar per neuron.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `size` randomly initialized neurons, each accepting
    /// `input_size` inputs. A `size` of zero yields an empty layer.
    pub fn random<R: Rng>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        let neurons = (0..size)
            .map(|_| Neuron::random(input_size, rng))
            .collect();

        Layer { neurons }
    }

    /// Creates a layer from explicit neurons.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Layer {
        Layer { neurons }
    }

    /// Number of neurons in this layer, which is also the length of its
    /// output vector.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Evaluates every neuron against `inputs`, in order. An empty layer
    /// produces an empty output vector for any input.
    pub fn evaluate(&self, inputs: &[f64]) -> Result<Vec<f64>, EvalError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.evaluate(inputs))
            .collect()
    }
}
