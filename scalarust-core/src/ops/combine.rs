// src/ops/combine.rs

use crate::error::ScalarustError;
use crate::ops::operation::Operation;
use crate::ops::traits::numeric::{ensure_finite, ScalarNumeric};
use crate::value::Value;
use crate::value_data::ValueData;

/// Applies `op` to `operands` and records the result in the graph.
///
/// The result keeps `operands` as its children, in order, and becomes the
/// newest consumer (and therefore the `parent`) of every operand.
///
/// # Errors
/// * `ScalarustError::InvalidArity` if fewer than `op.min_arity()` operands are given.
/// * `ScalarustError::NonFiniteValue` if an operand or the result is NaN or infinite.
pub fn combine<T: ScalarNumeric>(
    op: Operation,
    operands: &[Value<T>],
) -> Result<Value<T>, ScalarustError> {
    if operands.len() < op.min_arity() {
        return Err(ScalarustError::InvalidArity {
            operation: op,
            expected: op.min_arity(),
            actual: operands.len(),
        });
    }
    let inputs = operands
        .iter()
        .map(|operand| ensure_finite(operand.data(), op.name()))
        .collect::<Result<Vec<T>, ScalarustError>>()?;
    let data = ensure_finite(op.forward(&inputs), op.name())?;
    Ok(build_node(op, operands, data))
}

/// Unchecked counterpart of `combine` used by the operator traits.
pub(crate) fn combine_unchecked<T: ScalarNumeric>(op: Operation, operands: &[Value<T>]) -> Value<T> {
    let inputs: Vec<T> = operands.iter().map(Value::data).collect();
    let data = op.forward(&inputs);
    if !data.is_finite() {
        log::warn!("{} produced non-finite value {}", op.name(), data);
    }
    build_node(op, operands, data)
}

fn build_node<T: ScalarNumeric>(op: Operation, operands: &[Value<T>], data: T) -> Value<T> {
    let result = Value::from_data(ValueData::interior(data, op, operands.to_vec()));
    for operand in operands {
        operand.register_consumer(&result);
    }
    log::trace!("combine: {} over {} operands -> {}", op.name(), operands.len(), data);
    result
}

#[cfg(test)]
#[path = "combine_test.rs"]
mod tests;
