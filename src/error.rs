use thiserror::Error;

/// Error kind shared by the matrix engine and the network layer.
///
/// Every variant is detected synchronously by the operation that reports it and
/// is non-retryable: the caller has to correct its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Shape mismatch in construction, addition, or multiplication.
    #[error("invalid dimensions: {rows} x {cols}")]
    Dimension { rows: usize, cols: usize },

    /// A distribution parameter outside its domain (non-positive rate).
    #[error("exponential rate must be positive, got {rate}")]
    InvalidParameter { rate: f64 },

    /// An index outside the valid matrix range.
    #[error("coordinate ({row}, {col}) out of range for a {rows} x {cols} matrix")]
    Coordinate {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A flat weight vector whose length does not match the network total.
    #[error("flat weight vector holds {actual} values, the network needs {expected}")]
    WeightCount { expected: usize, actual: usize },

    /// A propagation input whose length does not match the configured input count.
    #[error("input vector holds {actual} values, the network takes {expected}")]
    InputLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
