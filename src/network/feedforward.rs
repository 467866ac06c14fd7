use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::config::NetworkConfig;

/// A multi-layer perceptron owning one weight matrix per layer transition.
///
/// Layer i's matrix has shape `(input_width + 1) x output_width`; the extra
/// row holds the bias weights, multiplied against the configured bias scalar
/// appended to every layer's input vector.
///
/// Weights come from one of two paths: random initialization from the
/// configured normal distribution, or [`build`](Self::build), which decodes a
/// flat weight vector produced by an external optimizer. A network may be
/// rebuilt any number of times. Instances are not internally synchronized;
/// concurrent use requires external serialization by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedforwardNetwork {
    config: NetworkConfig,
    weights: Vec<Matrix>,
    layer_outputs: Vec<Matrix>,
}

impl FeedforwardNetwork {
    /// Creates a network with weights drawn from the configured normal
    /// distribution. The configuration needs at least one hidden layer and
    /// non-zero widths.
    pub fn new(config: NetworkConfig) -> Result<FeedforwardNetwork> {
        if config.num_layers < 1 {
            return Err(Error::Dimension {
                rows: config.num_layers,
                cols: config.num_hidden,
            });
        }
        let mut layer_outputs = Vec::with_capacity(config.num_layers + 1);
        for (_, cols) in config.layer_shapes() {
            layer_outputs.push(Matrix::zeros(1, cols)?);
        }
        let mut net = FeedforwardNetwork {
            config,
            weights: Vec::new(),
            layer_outputs,
        };
        net.random_init(net.config.weight_mean, net.config.weight_std_dev)?;
        Ok(net)
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// The per-transition weight matrices, in propagation order.
    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    /// Total number of weights held across all layer matrices. Equals
    /// [`NetworkConfig::weight_count`].
    pub fn num_weights(&self) -> usize {
        self.weights.iter().map(|m| m.data().len()).sum()
    }

    /// Each layer's post-activation row from the most recent
    /// [`propagate`](Self::propagate) call.
    pub fn layer_outputs(&self) -> &[Matrix] {
        &self.layer_outputs
    }

    /// Reallocates every weight matrix from a normal distribution, bypassing
    /// the flat-vector path.
    pub fn random_init(&mut self, mean: f64, std_dev: f64) -> Result<()> {
        let mut weights = Vec::with_capacity(self.config.num_layers + 1);
        for (rows, cols) in self.config.layer_shapes() {
            weights.push(Matrix::normal(rows, cols, mean, std_dev)?);
        }
        debug!(
            "initialized {} layer matrices from N({}, {})",
            weights.len(),
            mean,
            std_dev
        );
        self.weights = weights;
        Ok(())
    }

    /// Decodes a flat weight vector into the per-layer matrices.
    ///
    /// The vector length must equal [`NetworkConfig::weight_count`]. Partition
    /// order is fixed: input→hidden, then each hidden→hidden transition in
    /// depth order, then hidden→output; each slice is reshaped row-major. This
    /// ordering is the contract for any optimizer producing flat weight
    /// vectors. On error the previously held weights are left untouched.
    pub fn build(&mut self, flat_weights: &[f64]) -> Result<()> {
        let expected = self.config.weight_count();
        if flat_weights.len() != expected {
            return Err(Error::WeightCount {
                expected,
                actual: flat_weights.len(),
            });
        }
        let mut weights = Vec::with_capacity(self.config.num_layers + 1);
        let mut offset = 0;
        for (rows, cols) in self.config.layer_shapes() {
            let len = rows * cols;
            weights.push(Matrix::from_vec(
                rows,
                cols,
                flat_weights[offset..offset + len].to_vec(),
            )?);
            offset += len;
        }
        debug!(
            "decoded {} weights into {} layer matrices",
            expected,
            weights.len()
        );
        self.weights = weights;
        Ok(())
    }

    /// Concatenates every layer matrix row-major into one flat vector; the
    /// exact inverse of [`build`](Self::build).
    pub fn to_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.num_weights());
        for matrix in &self.weights {
            flat.extend_from_slice(matrix.data());
        }
        flat
    }

    /// Propagates `input` through every layer and returns the output vector.
    ///
    /// Per layer: the configured bias is appended to the current vector, the
    /// augmented row is multiplied by the layer's weight matrix, and the
    /// activation function is applied to every cell of the result, output
    /// layer included. Each post-activation row is also recorded into the
    /// layer-output buffer without reallocating it.
    ///
    /// A dimension failure mid-pass would mean the weight matrices no longer
    /// match the configuration; it aborts the pass and surfaces the error.
    pub fn propagate(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.config.num_input {
            return Err(Error::InputLength {
                expected: self.config.num_input,
                actual: input.len(),
            });
        }
        let activation = self.config.activation;
        let bias = self.config.bias;
        let mut current = input.to_vec();
        for i in 0..self.weights.len() {
            current.push(bias);
            let width = current.len();
            let augmented = Matrix::from_vec(1, width, current)?;
            let activated = augmented
                .matmul(&self.weights[i])?
                .map(|x| activation.function(x));
            self.layer_outputs[i].copy_from(&activated);
            current = activated.row(0)?;
        }
        Ok(current)
    }
}
