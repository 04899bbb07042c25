use super::*;
use crate::utils::testing::create_test_value;

fn position(order: &[Value], node: &Value) -> usize {
    order
        .iter()
        .position(|candidate| candidate == node)
        .expect("node missing from topological order")
}

#[test]
fn test_leaf_alone() {
    let a = create_test_value(1.0, "a");
    let order = topological_order(&a);
    assert_eq!(order, vec![a]);
}

#[test]
fn test_operands_before_results() {
    let a = create_test_value(2.0, "a");
    let b = create_test_value(-3.5, "b");
    let c = create_test_value(1.0, "c");
    let product = &a * &b;
    let root = &product + &c;

    let order = topological_order(&root);
    assert_eq!(order.len(), 5);
    assert_eq!(order.last(), Some(&root));
    assert!(position(&order, &a) < position(&order, &product));
    assert!(position(&order, &b) < position(&order, &product));
    assert!(position(&order, &product) < position(&order, &root));
    assert!(position(&order, &c) < position(&order, &root));
}

#[test]
fn test_shared_node_listed_once() {
    let a = create_test_value(2.0, "a");
    let b = create_test_value(3.0, "b");
    let c = create_test_value(4.0, "c");
    let p = &a * &b;
    let q = &a * &c;
    let r = &p + &q;
    let doubled = &r + &r;

    let order = topological_order(&doubled);
    assert_eq!(order.len(), 7);
    assert_eq!(order.iter().filter(|node| **node == a).count(), 1);
    assert!(position(&order, &a) < position(&order, &p));
    assert!(position(&order, &a) < position(&order, &q));
}

#[test]
fn test_unrelated_consumers_are_excluded() {
    let a = create_test_value(2.0, "a");
    let b = create_test_value(3.0, "b");
    let root = &a + &b;
    let _elsewhere = &a * &a;

    let order = topological_order(&root);
    assert_eq!(order.len(), 3);
}

#[test]
fn test_deep_chain_does_not_overflow_stack() {
    let one = create_test_value(1.0, "one");
    let mut node = create_test_value(0.0, "start");
    for _ in 0..100_000 {
        node = &node + &one;
    }
    let order = topological_order(&node);
    assert_eq!(order.len(), 100_002);
    assert_eq!(order.last(), Some(&node));
}
