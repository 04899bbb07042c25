// src/value/create.rs

use crate::error::ScalarustError;
use crate::ops::traits::numeric::ScalarNumeric;
use crate::value::Value;

/// Creates a leaf node with no children, no operation and `grad = 0`.
/// An empty `label` leaves the node unlabelled.
pub fn leaf<T: ScalarNumeric>(data: T, label: &str) -> Result<Value<T>, ScalarustError> {
    if label.is_empty() {
        Value::new(data)
    } else {
        Value::with_label(data, label)
    }
}

/// Creates one labelled leaf per `(data, label)` pair.
pub fn leaves<T: ScalarNumeric>(pairs: &[(T, &str)]) -> Result<Vec<Value<T>>, ScalarustError> {
    pairs.iter().map(|&(data, label)| leaf(data, label)).collect()
}
