//! Error types for rawc-rs.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rawc-rs operations.
pub type Result<T> = std::result::Result<T, RawcError>;

/// Errors raised at the binding boundary, before anything reaches the C library.
#[derive(Debug, Error)]
pub enum RawcError {
    /// Operands of an elementwise op have different shapes.
    #[error("Shape mismatch: left {left:?} vs right {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    /// Buffer length does not match the product of the shape.
    #[error("Size mismatch: shape {shape:?} needs {expected} elements, got {actual}")]
    SizeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// A descriptor would carry a null data pointer.
    #[error("Null data pointer for {0} operand")]
    NullPointer(&'static str),

    /// No primitive is registered under this name.
    #[error("Unknown operation: {0}")]
    UnknownOp(String),

    /// Invalid tensor.
    #[error("Invalid tensor: {0}")]
    Tensor(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}

impl RawcError {
    /// Create a shape mismatch error from two shapes.
    pub fn shape_mismatch(left: &[usize], right: &[usize]) -> Self {
        Self::ShapeMismatch {
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }

    /// Create a tensor error.
    pub fn tensor(msg: impl Into<String>) -> Self {
        Self::Tensor(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RawcError::shape_mismatch(&[4], &[2, 2]);
        assert_eq!(
            format!("{}", err),
            "Shape mismatch: left [4] vs right [2, 2]"
        );

        let err = RawcError::SizeMismatch {
            shape: vec![2, 3],
            expected: 6,
            actual: 5,
        };
        assert_eq!(
            format!("{}", err),
            "Size mismatch: shape [2, 3] needs 6 elements, got 5"
        );

        let err = RawcError::UnknownOp("divide".into());
        assert_eq!(format!("{}", err), "Unknown operation: divide");

        let err = RawcError::config("invalid format");
        assert_eq!(format!("{}", err), "Configuration error: invalid format");

        let err = RawcError::FileNotFound(PathBuf::from("/path/to/left.json"));
        assert_eq!(format!("{}", err), "File not found: /path/to/left.json");
    }
}
