use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::create_test_value;
use approx::assert_relative_eq;

#[test]
fn test_mul_op_forward() {
    let a = create_test_value(2.0, "a");
    let b = create_test_value(-3.5, "b");
    let product = mul_op(&a, &b).unwrap();
    assert_eq!(product.data(), -7.0);
    assert_eq!(product.operation(), Some(Operation::Mul));
}

#[test]
fn test_mul_backward() {
    let a = create_test_value(2.0, "a");
    let b = create_test_value(-3.5, "b");
    let product = &a * &b;
    product.backward().unwrap();
    assert_eq!(product.grad(), 1.0);
    assert_eq!(a.grad(), -3.5);
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn test_mul_square_same_node() {
    let a = create_test_value(-1.5, "a");
    let square = &a * &a;
    assert_eq!(square.data(), 2.25);
    square.backward().unwrap();
    assert_relative_eq!(a.grad(), -3.0);
}

#[test]
fn test_product_op_backward() {
    let a = create_test_value(2.0, "a");
    let b = create_test_value(3.0, "b");
    let c = create_test_value(4.0, "c");
    let product = product_op(&[a.clone(), b.clone(), c.clone()]).unwrap();
    assert_eq!(product.data(), 24.0);
    product.backward().unwrap();
    assert_eq!(a.grad(), 12.0);
    assert_eq!(b.grad(), 8.0);
    assert_eq!(c.grad(), 6.0);
}

#[test]
fn test_product_op_grad_check() {
    let inputs = vec![
        create_test_value(1.5, "a"),
        create_test_value(-2.0, "b"),
        create_test_value(0.5, "c"),
    ];
    let grads = check_grad(product_op, &inputs, &GradCheckConfig::default()).unwrap();
    assert_relative_eq!(grads[0], -1.0);
    assert_relative_eq!(grads[1], 0.75);
    assert_relative_eq!(grads[2], -3.0);
}

#[test]
fn test_mul_f32() {
    let a = Value::new(2.0f32).unwrap();
    let b = Value::new(0.25f32).unwrap();
    let product = mul_op(&a, &b).unwrap();
    product.backward().unwrap();
    assert_eq!(product.data(), 0.5f32);
    assert_eq!(a.grad(), 0.25f32);
}
