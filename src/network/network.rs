use rand::prelude::*;

use crate::layers::dense::Layer;
use crate::neurons::neuron::EvalError;

/// An ordered sequence of layers forming a feedforward computation from an
/// input vector to an output vector.
///
/// The network owns its layers, and layers own their neurons; there is no
/// shared state, so a built network can be evaluated concurrently from
/// multiple threads. Only construction draws from the caller-supplied RNG.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    /// Declared width of the external input vector.
    pub input_count: usize,
    pub layers: Vec<Layer>,
}

impl Network {
    /// Creates a network with the given input width and no layers.
    pub fn empty(input_count: usize) -> Network {
        Network {
            input_count,
            layers: Vec::new(),
        }
    }

    /// Builds a network with the given input width and one layer per entry
    /// of `layer_sizes`, appended in order.
    pub fn new<R: Rng>(input_count: usize, layer_sizes: &[usize], rng: &mut R) -> Network {
        let mut network = Network::empty(input_count);
        for &size in layer_sizes {
            network.add_layer(size, rng);
        }
        network
    }

    /// Appends a layer of `count` randomly initialized neurons. Each neuron
    /// accepts as many inputs as the current last layer has neurons, or
    /// `input_count` when the network is still empty.
    ///
    /// `count == 0` is legal: it appends an empty layer, and any layer added
    /// after it gets zero-weight neurons.
    pub fn add_layer<R: Rng>(&mut self, count: usize, rng: &mut R) {
        let prev_width = match self.layers.last() {
            Some(layer) => layer.len(),
            None => self.input_count,
        };

        self.layers.push(Layer::random(count, prev_width, rng));
    }

    /// Feeds `inputs` through the layers in order and returns the last
    /// layer's output. With no layers the input is returned unchanged.
    ///
    /// Evaluation never mutates the network; a length mismatch anywhere in
    /// the pipeline aborts the call with the offending neuron's error.
    pub fn execute(&self, inputs: &[f64]) -> Result<Vec<f64>, EvalError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.evaluate(&current)?;
        }
        Ok(current)
    }
}
