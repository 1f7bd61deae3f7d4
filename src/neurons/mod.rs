pub mod neuron;

pub use neuron::{EvalError, Neuron};
