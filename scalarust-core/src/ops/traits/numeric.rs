use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the numeric types a `Value` can hold.
///
/// Strictly reserved for floating point types (`f32`, `f64`): the engine
/// relies on `Float` for `zero()`, `one()`, finiteness checks and casts, and
/// on `NumAssignOps` to accumulate gradients in place.
pub trait ScalarNumeric:
    Float // Includes Num + Copy + NumCast + etc.
    + NumAssignOps
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
}

impl ScalarNumeric for f32 {}
impl ScalarNumeric for f64 {}

/// Checks that `value` is finite, naming the operation in the error.
pub(crate) fn ensure_finite<T: ScalarNumeric>(
    value: T,
    operation: &str,
) -> Result<T, crate::error::ScalarustError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(crate::error::ScalarustError::NonFiniteValue {
            operation: operation.to_string(),
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_numeric<T: ScalarNumeric>(value: T) -> T {
        value + T::one()
    }

    #[test]
    fn test_f32_impl_scalar_numeric() {
        assert_eq!(process_numeric(1.0f32), 2.0f32);
    }

    #[test]
    fn test_f64_impl_scalar_numeric() {
        assert_eq!(process_numeric(1.0f64), 2.0f64);
    }

    #[test]
    fn test_ensure_finite_rejects_nan_and_inf() {
        assert_eq!(ensure_finite(1.5f64, "test"), Ok(1.5));
        assert!(matches!(
            ensure_finite(f64::NAN, "test"),
            Err(crate::error::ScalarustError::NonFiniteValue { .. })
        ));
        assert!(matches!(
            ensure_finite(f32::INFINITY, "leaf"),
            Err(crate::error::ScalarustError::NonFiniteValue { operation, value })
                if operation == "leaf" && value == f64::INFINITY
        ));
    }
}
