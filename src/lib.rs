pub mod layers;
pub mod network;
pub mod neurons;

// Convenience re-exports
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use neurons::neuron::{EvalError, Neuron};
