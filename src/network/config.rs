use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;

/// Describes the shape and numeric parameters of a feedforward network.
///
/// Built once by the caller and read-only afterwards. `num_layers` counts
/// hidden layers, so a network owns `num_layers + 1` weight matrices: one per
/// layer transition.
///
/// Fields:
/// - `num_input`      — input vector width
/// - `num_output`     — output vector width
/// - `num_hidden`     — neurons per hidden layer
/// - `num_layers`     — number of hidden layers (at least 1)
/// - `bias`           — scalar appended to every layer's input vector
/// - `weight_mean`    — mean of the weight-initialization distribution
/// - `weight_std_dev` — standard deviation of that distribution
/// - `activation`     — function applied after every layer, output included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub num_input: usize,
    pub num_output: usize,
    pub num_hidden: usize,
    pub num_layers: usize,
    pub bias: f64,
    pub weight_mean: f64,
    pub weight_std_dev: f64,
    pub activation: ActivationFunction,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            num_input: 0,
            num_output: 0,
            num_hidden: 0,
            num_layers: 0,
            bias: 0.0,
            weight_mean: 0.0,
            weight_std_dev: 0.0,
            activation: ActivationFunction::Sigmoid,
        }
    }
}

impl NetworkConfig {
    pub fn new() -> NetworkConfig {
        NetworkConfig::default()
    }

    pub fn num_input(mut self, n: usize) -> Self {
        self.num_input = n;
        self
    }

    pub fn num_output(mut self, n: usize) -> Self {
        self.num_output = n;
        self
    }

    pub fn num_hidden(mut self, n: usize) -> Self {
        self.num_hidden = n;
        self
    }

    pub fn num_layers(mut self, n: usize) -> Self {
        self.num_layers = n;
        self
    }

    pub fn bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn weight_mean(mut self, mean: f64) -> Self {
        self.weight_mean = mean;
        self
    }

    pub fn weight_std_dev(mut self, std_dev: f64) -> Self {
        self.weight_std_dev = std_dev;
        self
    }

    pub fn activation(mut self, activation: ActivationFunction) -> Self {
        self.activation = activation;
        self
    }

    /// Total number of weights across all layer transitions, one bias row per
    /// transition matrix:
    ///
    /// ```text
    /// (num_input + 1) * num_hidden
    ///   + (num_hidden + 1) * num_hidden * (num_layers - 1)
    ///   + (num_hidden + 1) * num_output
    /// ```
    ///
    /// The only valid length for a flat weight vector passed to
    /// [`FeedforwardNetwork::build`](crate::network::feedforward::FeedforwardNetwork::build).
    pub fn weight_count(&self) -> usize {
        (self.num_input + 1) * self.num_hidden
            + (self.num_hidden + 1) * self.num_hidden * self.num_layers.saturating_sub(1)
            + (self.num_hidden + 1) * self.num_output
    }

    /// The `(rows, cols)` shape of each layer-transition weight matrix, in
    /// propagation order: input→hidden, each hidden→hidden, hidden→output.
    /// The extra row per matrix holds the bias weights.
    pub fn layer_shapes(&self) -> Vec<(usize, usize)> {
        let mut shapes = Vec::with_capacity(self.num_layers + 1);
        let mut width = self.num_input;
        for _ in 0..self.num_layers {
            shapes.push((width + 1, self.num_hidden));
            width = self.num_hidden;
        }
        shapes.push((width + 1, self.num_output));
        shapes
    }
}
