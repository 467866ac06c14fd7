use neurite_nn::{
    ActivationFunction, Environment, FeedforwardNetwork, NetworkConfig, Result, XorEnvironment,
};

// A hand-crafted step-activation solution to XOR: the first hidden neuron
// computes OR, the second AND, and the output fires on OR-and-not-AND.
// Layer matrices are (input_width + 1) x output_width with the bias row last.
const XOR_WEIGHTS: [f64; 9] = [
    1.0, 1.0, // input 0 -> hidden
    1.0, 1.0, // input 1 -> hidden
    0.5, 1.5, // bias row: OR threshold, AND threshold
    1.0, -1.0, 0.5, // hidden + bias -> output
];

fn main() -> Result<()> {
    env_logger::init();

    let config = NetworkConfig::new()
        .num_input(2)
        .num_hidden(2)
        .num_output(1)
        .num_layers(1)
        .bias(-1.0)
        .weight_mean(0.0)
        .weight_std_dev(6.0)
        .activation(ActivationFunction::Step);

    let mut solved = FeedforwardNetwork::new(config.clone())?;
    solved.build(&XOR_WEIGHTS)?;

    println!("hand-crafted step network:");
    for input in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
        let output = solved.propagate(&input)?;
        println!("  {:?} -> {}", input, output[0]);
    }
    println!("  squared error: {}", XorEnvironment.evaluate(&mut solved)?);

    let mut random = FeedforwardNetwork::new(config.activation(ActivationFunction::Sigmoid))?;
    println!(
        "random sigmoid network squared error: {:.4}",
        XorEnvironment.evaluate(&mut random)?
    );

    Ok(())
}
