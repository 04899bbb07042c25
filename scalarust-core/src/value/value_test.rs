use super::*;
use crate::utils::testing::create_test_value;
use std::collections::HashSet;

#[test]
fn test_leaf_defaults() {
    let a = create_test_value(2.0, "a");
    assert_eq!(a.data(), 2.0);
    assert_eq!(a.grad(), 0.0);
    assert_eq!(a.label().as_deref(), Some("a"));
    assert!(a.is_leaf());
    assert_eq!(a.operation(), None);
    assert!(a.children().is_empty());
    assert!(a.parent().is_none());
    assert_eq!(a.consumer_count(), 0);
}

#[test]
fn test_leaf_rejects_non_finite() {
    assert!(matches!(
        Value::new(f64::NAN),
        Err(ScalarustError::NonFiniteValue { .. })
    ));
    assert!(matches!(
        Value::with_label(f32::NEG_INFINITY, "x"),
        Err(ScalarustError::NonFiniteValue { .. })
    ));
}

#[test]
fn test_create_leaf_empty_label_is_unlabelled() {
    let x = leaf(1.5f32, "").unwrap();
    assert_eq!(x.label(), None);
    let y = leaf(1.5f32, "y").unwrap();
    assert_eq!(y.label().as_deref(), Some("y"));
}

#[test]
fn test_create_leaves() {
    let values = create::leaves(&[(2.0, "a"), (-3.5, "b")]).unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[1].data(), -3.5);
    assert_eq!(values[1].label().as_deref(), Some("b"));
}

#[test]
fn test_identity_equality_and_hash() {
    let a = create_test_value(2.0, "a");
    let twin = create_test_value(2.0, "a");
    let alias = a.clone();
    assert_eq!(a, alias);
    assert_ne!(a, twin);

    let set: HashSet<Value> = [a.clone(), alias, twin].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_parent_is_overwritten_by_latest_consumer() {
    let a = create_test_value(2.0, "a");
    let b = create_test_value(3.0, "b");
    let c = create_test_value(4.0, "c");

    let p = &a * &b;
    assert_eq!(a.parent(), Some(p.clone()));
    let q = &a * &c;
    assert_eq!(a.parent(), Some(q.clone()));
    assert_eq!(b.parent(), Some(p.clone()));
    assert_eq!(a.consumers(), vec![p.clone(), q.clone()]);
    assert_eq!(a.consumer_count(), 2);
    assert_eq!(a.parent_link(), ParentLink::Live(q));
}

#[test]
fn test_same_operation_recorded_once() {
    let a = create_test_value(2.0, "a");
    let doubled = &a + &a;
    assert_eq!(a.consumer_count(), 1);
    assert_eq!(a.parent(), Some(doubled));
}

#[test]
fn test_dropped_last_consumer_still_owns_parent_slot() {
    let a = create_test_value(2.0, "a");
    let b = create_test_value(3.0, "b");
    assert_eq!(a.parent_link(), ParentLink::Unconsumed);
    let kept = &a + &b;
    {
        let _dropped = &a * &b;
        assert_eq!(a.consumer_count(), 2);
    }
    assert_eq!(a.consumer_count(), 1);
    assert_eq!(a.consumers(), vec![kept.clone()]);
    // The older live consumer does not take the parent slot back.
    assert_eq!(a.parent_link(), ParentLink::Dropped);
    assert!(a.parent().is_none());

    let newest = &a + &b;
    assert_eq!(a.parent(), Some(newest));
}

#[test]
fn test_dropped_consumers_are_pruned() {
    let a = create_test_value(2.0, "a");
    let mut kept = Vec::new();
    for i in 0..1000 {
        let sum = &a + &a;
        if i % 100 == 0 {
            kept.push(sum);
        }
    }
    assert_eq!(a.consumer_count(), 10);
    assert!(a.read_data().consumers.len() <= 16);
}

#[test]
fn test_detach_copies_data_and_label_only() {
    let a = create_test_value(2.0, "a");
    let b = create_test_value(3.0, "b");
    let product = &a * &b;
    product.set_label("p");
    product.backward().unwrap();

    let detached = product.detach();
    assert_ne!(detached, product);
    assert_eq!(detached.data(), 6.0);
    assert_eq!(detached.grad(), 0.0);
    assert_eq!(detached.label().as_deref(), Some("p"));
    assert!(detached.is_leaf());
}

#[test]
fn test_zero_grad() {
    let a = create_test_value(2.0, "a");
    a.backward().unwrap();
    assert_eq!(a.grad(), 1.0);
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_display_and_debug() {
    let a = create_test_value(2.0, "a");
    assert_eq!(format!("{}", a), "Value(data=2, grad=0)");
    let debug = format!("{:?}", &a + &a);
    assert!(debug.contains("op: Some(Add)"));
    assert!(debug.contains("children: 2"));
}
