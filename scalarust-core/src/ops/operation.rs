// src/ops/operation.rs

use crate::ops::traits::numeric::ScalarNumeric;
use crate::value::Value;
use std::fmt;

/// The operator that produced an interior node.
///
/// Each variant owns its forward function and its local-derivative rule.
/// Adding an operator means adding a variant and its two match arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `x_0 + x_1 + ... + x_n`
    Add,
    /// `x_0 * x_1 * ... * x_n`
    Mul,
}

impl Operation {
    /// Short symbol used for display and graph rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Mul => "*",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Mul => "mul",
        }
    }

    /// Minimum number of operands accepted by `combine`.
    pub fn min_arity(&self) -> usize {
        2
    }

    /// Evaluates the operation on operand values.
    pub fn forward<T: ScalarNumeric>(&self, operands: &[T]) -> T {
        match self {
            Operation::Add => operands.iter().fold(T::zero(), |acc, &x| acc + x),
            Operation::Mul => operands.iter().fold(T::one(), |acc, &x| acc * x),
        }
    }

    /// Partial derivative of the result with respect to the operand in
    /// argument position `slot`, evaluated at `operands`.
    ///
    /// * `Add`: 1.
    /// * `Mul`: product of every other operand (the co-factors).
    pub fn local_derivative<T: ScalarNumeric>(&self, slot: usize, operands: &[T]) -> T {
        match self {
            Operation::Add => T::one(),
            Operation::Mul => operands
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != slot)
                .fold(T::one(), |acc, (_, &x)| acc * x),
        }
    }

    /// Total partial derivative of a result built from `children` with
    /// respect to `node`: the sum of `local_derivative` over every slot
    /// holding `node`. For `x + x + ... + x` (n slots) this is n.
    /// Returns zero if `node` is not among `children`.
    pub fn partial_wrt<T: ScalarNumeric>(&self, node: &Value<T>, children: &[Value<T>]) -> T {
        let operands: Vec<T> = children.iter().map(Value::data).collect();
        children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.ptr_eq(node))
            .fold(T::zero(), |acc, (slot, _)| {
                acc + self.local_derivative(slot, &operands)
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
#[path = "operation_test.rs"]
mod tests;
