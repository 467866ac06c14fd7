pub mod activation;
pub mod environment;
pub mod error;
pub mod math;
pub mod network;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use environment::environment::{Environment, XorEnvironment};
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use network::config::NetworkConfig;
pub use network::feedforward::FeedforwardNetwork;
