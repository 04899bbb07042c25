// src/value/mod.rs

use crate::error::ScalarustError;
use crate::ops::operation::Operation;
use crate::ops::traits::numeric::ScalarNumeric;
use crate::value_data::ValueData;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod autograd_methods;
pub mod create;
mod traits;

pub use create::leaf;

/// What a node's parent back-reference points at.
#[derive(Debug, Clone, PartialEq)]
pub enum ParentLink<T: ScalarNumeric = f64> {
    /// Never used as an operand: the node is a root.
    Unconsumed,
    /// The most recent consumer has been dropped. It was never part of a
    /// graph that could be differentiated, so its gradient is zero.
    Dropped,
    Live(Value<T>),
}

/// A scalar node in the computation graph.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node can be the operand of several later
///     operations; clones are cheap and all point at the same node.
/// 2.  **Interior Mutability:** `grad` and the consumer list change after
///     construction, through an immutable `Value` handle.
///
/// Equality and hashing are by node identity, never by numeric value.
pub struct Value<T: ScalarNumeric = f64> {
    pub(crate) data: Arc<RwLock<ValueData<T>>>,
}

impl<T: ScalarNumeric> Value<T> {
    /// Creates an unlabelled leaf node.
    ///
    /// # Errors
    /// Returns `ScalarustError::NonFiniteValue` if `data` is NaN or infinite.
    pub fn new(data: T) -> Result<Self, ScalarustError> {
        Ok(Self::from_data(ValueData::new(data, None)?))
    }

    /// Creates a labelled leaf node.
    pub fn with_label(data: T, label: impl Into<String>) -> Result<Self, ScalarustError> {
        Ok(Self::from_data(ValueData::new(data, Some(label.into()))?))
    }

    pub(crate) fn from_data(value_data: ValueData<T>) -> Self {
        Value {
            data: Arc::new(RwLock::new(value_data)),
        }
    }

    /// Acquires the read lock, recovering the guard if a writer panicked.
    pub(crate) fn read_data(&self) -> RwLockReadGuard<'_, ValueData<T>> {
        self.data.read().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for value data was poisoned. Recovering reader guard.");
            poisoned.into_inner()
        })
    }

    /// Acquires the write lock, recovering the guard if a writer panicked.
    pub(crate) fn write_data(&self) -> RwLockWriteGuard<'_, ValueData<T>> {
        self.data.write().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for value data was poisoned. Recovering writer guard.");
            poisoned.into_inner()
        })
    }

    /// Returns the forward value.
    pub fn data(&self) -> T {
        self.read_data().data
    }

    /// Returns the gradient written by the last backward pass (zero before any).
    pub fn grad(&self) -> T {
        self.read_data().grad
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Returns the operation that produced this node, `None` for leaves.
    pub fn operation(&self) -> Option<Operation> {
        self.read_data().op
    }

    /// Returns the operands of this node in argument order.
    pub fn children(&self) -> Vec<Value<T>> {
        self.read_data().children.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().op.is_none()
    }

    /// Returns the node this one was most recently consumed into.
    ///
    /// This is the single parent back-reference: every new operation taking
    /// this node as an operand replaces it. `None` if the node was never
    /// consumed or if its most recent consumer has been dropped; use
    /// `parent_link` to tell the two apart.
    pub fn parent(&self) -> Option<Value<T>> {
        match self.parent_link() {
            ParentLink::Live(parent) => Some(parent),
            ParentLink::Unconsumed | ParentLink::Dropped => None,
        }
    }

    /// State of the single parent back-reference.
    pub fn parent_link(&self) -> ParentLink<T> {
        match self.read_data().consumers.last() {
            None => ParentLink::Unconsumed,
            Some(weak) => weak
                .upgrade()
                .map_or(ParentLink::Dropped, |data| ParentLink::Live(Value { data })),
        }
    }

    /// Returns every live node that consumed this one, oldest first.
    pub fn consumers(&self) -> Vec<Value<T>> {
        self.read_data()
            .consumers
            .iter()
            .filter_map(|weak| weak.upgrade())
            .map(|data| Value { data })
            .collect()
    }

    /// Number of live operations this node is an operand of.
    pub fn consumer_count(&self) -> usize {
        self.read_data()
            .consumers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Records `consumer` as the newest consumer of this node.
    ///
    /// Operands are registered right after their result is built, so a node
    /// used in several slots of one operation finds that operation last and
    /// is recorded once. Dropped consumers are pruned whenever the list
    /// length reaches a power of two, which keeps the list within twice the
    /// number of live consumers at amortised constant cost.
    pub(crate) fn register_consumer(&self, consumer: &Value<T>) {
        let mut guard = self.write_data();
        let consumer_ptr = Arc::as_ptr(&consumer.data);
        if guard
            .consumers
            .last()
            .is_some_and(|weak| weak.as_ptr() == consumer_ptr)
        {
            return;
        }
        if guard.consumers.len().is_power_of_two() {
            guard.consumers.retain(|weak| weak.strong_count() > 0);
        }
        guard.consumers.push(Arc::downgrade(&consumer.data));
    }

    /// Resets the gradient of this node to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = T::zero();
    }

    /// Creates a new leaf with the same data and label, detached from the
    /// computation graph.
    pub fn detach(&self) -> Value<T> {
        let guard = self.read_data();
        Value::from_data(ValueData {
            data: guard.data,
            grad: T::zero(),
            label: guard.label.clone(),
            op: None,
            children: Vec::new(),
            consumers: Vec::new(),
        })
    }

    /// Pointer to the shared node, stable across clones of the handle.
    pub(crate) fn id_ptr(&self) -> *const RwLock<ValueData<T>> {
        Arc::as_ptr(&self.data)
    }

    /// Returns true if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Value<T>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Label for diagnostics, falling back to the node address.
    pub(crate) fn display_label(&self) -> String {
        self.label()
            .unwrap_or_else(|| format!("{:p}", self.id_ptr()))
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
