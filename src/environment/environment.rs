use crate::error::Result;
use crate::network::feedforward::FeedforwardNetwork;

/// An evaluator that takes a network and puts it to the test: drive it through
/// [`FeedforwardNetwork::propagate`] over some fixed inputs and reduce the
/// results into a scalar. The scalar is a fitness for reinforcement-style
/// evaluation or an error for supervised evaluation.
pub trait Environment {
    fn evaluate(&self, net: &mut FeedforwardNetwork) -> Result<f64>;
}

/// The XOR truth table as an error environment: sums the squared deviation of
/// the network's first output from the expected XOR value over the four fixed
/// input pairs. A network that solves XOR scores 0.0.
pub struct XorEnvironment;

const XOR_CASES: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], 0.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], 0.0),
];

impl Environment for XorEnvironment {
    fn evaluate(&self, net: &mut FeedforwardNetwork) -> Result<f64> {
        let mut error = 0.0;
        for (input, expected) in XOR_CASES {
            let output = net.propagate(&input)?;
            let diff = output[0] - expected;
            error += diff * diff;
        }
        Ok(error)
    }
}
