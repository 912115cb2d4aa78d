//! Error types for the network and its reporting helpers

use std::fmt;

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, NetError>;

/// Which side of a sample disagreed with the configured layer sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Input,
    Label,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorKind::Input => write!(f, "input"),
            VectorKind::Label => write!(f, "label"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetError {
    /// Layer sizes or hyperparameters cannot describe a network
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Inputs and labels are not parallel sequences
    #[error("Got {inputs} inputs but {labels} labels")]
    LengthMismatch { inputs: usize, labels: usize },

    /// A sample does not fit the configured layer sizes
    #[error("{kind} vector {index} has length {actual}, expected {expected}")]
    DimensionMismatch {
        kind: VectorKind,
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Metrics were requested over no samples
    #[error("Cannot compute metrics over an empty dataset")]
    EmptyDataset,
}
