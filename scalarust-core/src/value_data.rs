// src/value_data.rs
use std::mem;
use std::sync::{Arc, RwLock, Weak};

use crate::error::ScalarustError;
use crate::ops::operation::Operation;
use crate::ops::traits::numeric::{ensure_finite, ScalarNumeric};
use crate::value::Value;

/// Internal storage and metadata for a `Value`.
///
/// Holds the forward value, the gradient and the graph edges of one scalar
/// node. It is wrapped in `Arc<RwLock<ValueData>>` by the `Value` struct to
/// allow shared ownership and interior mutability.
#[derive(Debug)]
pub struct ValueData<T: ScalarNumeric> {
    /// Forward value. Never changes after construction.
    pub(crate) data: T,
    /// Partial derivative of the last backward root with respect to this node.
    pub(crate) grad: T,
    /// Optional human readable name, diagnostic only.
    pub(crate) label: Option<String>,

    // --- Graph edges ---
    /// Operation that produced this node. Leaves have `op = None`.
    pub(crate) op: Option<Operation>,
    /// Operands of `op`, in argument order. The same node may appear in
    /// several slots (`a + a`).
    pub(crate) children: Vec<Value<T>>,
    /// Every node that consumed this one as an operand, oldest first.
    /// Weak references: results own their operands, not the other way round.
    pub(crate) consumers: Vec<Weak<RwLock<ValueData<T>>>>,
}

impl<T: ScalarNumeric> ValueData<T> {
    /// Creates the data of a leaf node.
    ///
    /// # Errors
    /// Returns `ScalarustError::NonFiniteValue` if `data` is NaN or infinite.
    pub fn new(data: T, label: Option<String>) -> Result<Self, ScalarustError> {
        let data = ensure_finite(data, "leaf construction")?;
        Ok(ValueData {
            data,
            grad: T::zero(),
            label,
            op: None,
            children: Vec::new(),
            consumers: Vec::new(),
        })
    }

    /// Creates the data of an interior node produced by `op` over `children`.
    /// No finiteness check; callers decide.
    pub(crate) fn interior(data: T, op: Operation, children: Vec<Value<T>>) -> Self {
        ValueData {
            data,
            grad: T::zero(),
            label: None,
            op: Some(op),
            children,
            consumers: Vec::new(),
        }
    }
}

impl<T: ScalarNumeric> Drop for ValueData<T> {
    /// Releases operands iteratively so dropping a deep expression does not
    /// recurse once per level.
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some(child) = stack.pop() {
            if let Ok(lock) = Arc::try_unwrap(child.data) {
                let mut inner = lock.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
                stack.append(&mut inner.children);
            }
        }
    }
}
