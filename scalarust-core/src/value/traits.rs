// src/value/traits.rs

use crate::ops::traits::numeric::ScalarNumeric;
use crate::value::Value;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

impl<T: ScalarNumeric> Clone for Value<T> {
    /// Shallow clone: both handles refer to the same node.
    fn clone(&self) -> Self {
        Value {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: ScalarNumeric> Debug for Value<T> {
    /// Shows the node itself without recursing into its operands.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("label", &guard.label)
            .field("op", &guard.op)
            .field("children", &guard.children.len())
            .finish()
    }
}

impl<T: ScalarNumeric> Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={})", guard.data, guard.grad)
    }
}

impl<T: ScalarNumeric> PartialEq for Value<T> {
    /// Identity comparison: two distinct leaves holding `2.0` are not equal.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ScalarNumeric> Eq for Value<T> {}

impl<T: ScalarNumeric> Hash for Value<T> {
    /// Hashes the node address, consistent with `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id_ptr().hash(state);
    }
}
