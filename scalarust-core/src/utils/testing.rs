use crate::ops::traits::numeric::ScalarNumeric;
use crate::value::Value;

/// Checks that a value's data and gradient are within `tolerance` of the
/// expected ones. Panics with the node's label otherwise.
pub fn check_value_near<T: ScalarNumeric>(
    actual: &Value<T>,
    expected_data: T,
    expected_grad: T,
    tolerance: T,
) {
    let label = actual.label().unwrap_or_else(|| "<unnamed>".to_string());
    let data_diff = (actual.data() - expected_data).abs();
    if data_diff > tolerance {
        panic!(
            "Data mismatch at {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            label,
            actual.data(),
            expected_data,
            data_diff,
            tolerance
        );
    }
    let grad_diff = (actual.grad() - expected_grad).abs();
    if grad_diff > tolerance {
        panic!(
            "Grad mismatch at {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            label,
            actual.grad(),
            expected_grad,
            grad_diff,
            tolerance
        );
    }
}

/// Helper to create a labelled f64 leaf for tests.
pub fn create_test_value(data: f64, label: &str) -> Value {
    Value::with_label(data, label).expect("Failed to create test value")
}
