// scalarust-core/src/ops/arithmetic/add.rs

use crate::error::ScalarustError;
use crate::ops::combine::combine;
use crate::ops::operation::Operation;
use crate::ops::traits::numeric::ScalarNumeric;
use crate::value::Value;

/// Adds two values, recording the sum in the computation graph.
///
/// # Errors
/// Returns `ScalarustError::NonFiniteValue` if an operand or the sum is not finite.
pub fn add_op<T: ScalarNumeric>(a: &Value<T>, b: &Value<T>) -> Result<Value<T>, ScalarustError> {
    combine(Operation::Add, &[a.clone(), b.clone()])
}

/// Sums two or more values into a single `Add` node.
pub fn sum_op<T: ScalarNumeric>(values: &[Value<T>]) -> Result<Value<T>, ScalarustError> {
    combine(Operation::Add, values)
}

// `a + b` sugar. Skips the finiteness check of `add_op`.
impl_value_binary_op!(Add, add, Operation::Add);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
