use dendrite::{Layer, Network, Neuron};

fn ones_neuron(width: usize) -> Neuron {
    Neuron::from_parts(vec![1.0; width], 0.0)
}

// A 4-input network with layers [3, 2], all weights 1.0 and all biases 0.0.
// Every neuron then just sums its inputs.
fn all_ones_network() -> Network {
    Network {
        input_count: 4,
        layers: vec![
            Layer::from_neurons(vec![ones_neuron(4), ones_neuron(4), ones_neuron(4)]),
            Layer::from_neurons(vec![ones_neuron(3), ones_neuron(3)]),
        ],
    }
}

#[test]
fn cancelling_input_zeroes_every_layer() {
    let network = all_ones_network();
    let inputs = [1.0, -1.0, 1.0, -1.0];

    // 1 - 1 + 1 - 1 = 0 for each first-layer neuron.
    assert_eq!(network.layers[0].evaluate(&inputs), Ok(vec![0.0, 0.0, 0.0]));
    assert_eq!(network.execute(&inputs), Ok(vec![0.0, 0.0]));
}

#[test]
fn summing_network_accumulates_across_layers() {
    let network = all_ones_network();

    // Layer 1: each neuron sums to 4; layer 2: each neuron sums 4+4+4.
    assert_eq!(
        network.execute(&[1.0, 1.0, 1.0, 1.0]),
        Ok(vec![12.0, 12.0])
    );
}

#[test]
fn evaluation_does_not_mutate_the_network() {
    let network = all_ones_network();
    let before = network.clone();

    network.execute(&[0.25, 0.5, 0.75, 1.0]).unwrap();
    assert_eq!(network, before);
}
