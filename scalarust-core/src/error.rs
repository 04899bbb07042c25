use crate::ops::operation::Operation;
use thiserror::Error;

/// Custom error type for the Scalarust engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarustError {
    #[error("Non-finite value {value} rejected during {operation}")]
    NonFiniteValue { operation: String, value: f64 },

    #[error("Operation {operation:?} needs at least {expected} operands, got {actual}")]
    InvalidArity {
        operation: Operation,
        expected: usize,
        actual: usize,
    },

    #[error("Backward pass produced a non-finite gradient {value} at node {label}")]
    NonFiniteGradient { label: String, value: f64 },

    #[error("Internal error: {0}")]
    InternalError(String),
}
