//! Gradient propagation over the scalar computation graph.

pub mod backward;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, numeric_gradient, DifferenceScheme, GradCheckConfig, GradCheckError};
pub use graph::topological_order;

/// How `Value::backward_with` assigns gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackwardMode {
    /// Reverse topological pass from the root. Every use of a shared node
    /// contributes to its gradient.
    #[default]
    Accumulate,
    /// Pre-order walk where each node takes its gradient from its single
    /// `parent` (the most recent consumer) only. Contributions through
    /// earlier consumers are dropped; a node without a parent gets 1.
    LastConsumer,
}
