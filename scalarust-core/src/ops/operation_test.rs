use super::*;
use crate::utils::testing::create_test_value;
use approx::assert_relative_eq;

#[test]
fn test_forward() {
    assert_eq!(Operation::Add.forward(&[1.0, 2.0, 3.5]), 6.5);
    assert_eq!(Operation::Mul.forward(&[2.0f32, -3.0, 0.5]), -3.0);
}

#[test]
fn test_local_derivative_add_is_one() {
    let operands = [4.0, -1.0, 7.0];
    for slot in 0..operands.len() {
        assert_eq!(Operation::Add.local_derivative(slot, &operands), 1.0);
    }
}

#[test]
fn test_local_derivative_mul_is_product_of_cofactors() {
    let operands = [2.0, -3.5, 4.0];
    assert_relative_eq!(Operation::Mul.local_derivative(0, &operands), -14.0);
    assert_relative_eq!(Operation::Mul.local_derivative(1, &operands), 8.0);
    assert_relative_eq!(Operation::Mul.local_derivative(2, &operands), -7.0);
}

#[test]
fn test_partial_wrt_counts_every_slot() {
    let a = create_test_value(3.0, "a");
    let b = create_test_value(5.0, "b");

    let children = vec![a.clone(), a.clone(), b.clone()];
    assert_eq!(Operation::Add.partial_wrt(&a, &children), 2.0);
    assert_eq!(Operation::Add.partial_wrt(&b, &children), 1.0);

    // d(a*a)/da = 2a
    let square = vec![a.clone(), a.clone()];
    assert_eq!(Operation::Mul.partial_wrt(&a, &square), 6.0);
}

#[test]
fn test_partial_wrt_ignores_equal_valued_twin() {
    let a = create_test_value(3.0, "a");
    let twin = create_test_value(3.0, "twin");
    let children = vec![a.clone(), twin];
    assert_eq!(Operation::Add.partial_wrt(&a, &children), 1.0);
    assert_eq!(Operation::Mul.partial_wrt(&a, &children), 3.0);
}

#[test]
fn test_partial_wrt_absent_node_is_zero() {
    let a = create_test_value(3.0, "a");
    let b = create_test_value(5.0, "b");
    let stranger = create_test_value(1.0, "s");
    assert_eq!(Operation::Mul.partial_wrt(&stranger, &[a, b]), 0.0);
}

#[test]
fn test_symbols() {
    assert_eq!(Operation::Add.to_string(), "+");
    assert_eq!(Operation::Mul.symbol(), "*");
    assert_eq!(Operation::Mul.name(), "mul");
}
