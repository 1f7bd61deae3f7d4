use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::network::network::Network;

/// A fully serializable description of a network architecture: the input
/// width plus the neuron count of each layer, in order.
///
/// `NetworkSpec` carries no weights or biases. It can be saved to / loaded
/// from JSON and turned into a freshly initialized [`Network`] with
/// [`NetworkSpec::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Width of the external input vector.
    pub input_count: usize,
    /// Ordered list of layer neuron counts (input side first).
    pub layer_sizes: Vec<usize>,
}

impl NetworkSpec {
    pub fn new(input_count: usize, layer_sizes: Vec<usize>) -> NetworkSpec {
        NetworkSpec {
            input_count,
            layer_sizes,
        }
    }

    /// Builds a randomly initialized network with this architecture.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Network {
        Network::new(self.input_count, &self.layer_sizes, rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
