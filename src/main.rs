// Demonstration driver. All forward-propagation logic lives in the library
// (src/lib.rs and its modules); this binary only builds one network and
// prints its (randomly initialized) output.
use dendrite::Network;

fn main() {
    let mut rng = rand::thread_rng();
    let network = Network::new(4, &[3, 2], &mut rng);

    match network.execute(&[1.0, -1.0, 1.0, -1.0]) {
        Ok(output) => println!("{output:?}"),
        Err(err) => eprintln!("evaluation failed: {err}"),
    }
}
