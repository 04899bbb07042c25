// scalarust-core/src/ops/arithmetic/mul.rs

use crate::error::ScalarustError;
use crate::ops::combine::combine;
use crate::ops::operation::Operation;
use crate::ops::traits::numeric::ScalarNumeric;
use crate::value::Value;

/// Multiplies two values, recording the product in the computation graph.
///
/// # Errors
/// Returns `ScalarustError::NonFiniteValue` if an operand or the product is not finite.
pub fn mul_op<T: ScalarNumeric>(a: &Value<T>, b: &Value<T>) -> Result<Value<T>, ScalarustError> {
    combine(Operation::Mul, &[a.clone(), b.clone()])
}

/// Multiplies two or more values into a single `Mul` node.
pub fn product_op<T: ScalarNumeric>(values: &[Value<T>]) -> Result<Value<T>, ScalarustError> {
    combine(Operation::Mul, values)
}

impl_value_binary_op!(Mul, mul, Operation::Mul);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
