use serde::{Deserialize, Serialize};
use std::f64::consts::E;

/// The scalar function applied to every cell after each layer's matrix
/// multiplication. Pure and stateless; the network invokes it once per layer
/// per cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Hard threshold: 0 below zero, 1 otherwise. Discontinuous.
    Step,
    /// `1 / (1 + e^-x)`, range (0, 1).
    Sigmoid,
    /// `2 / (1 + e^-2x) - 1`, range (-1, 1).
    Tanh,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Step => {
                if x < 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => 2.0 / (1.0 + E.powf(-2.0 * x)) - 1.0,
        }
    }
}
