// src/autograd/backward.rs

use crate::autograd::graph::topological_order;
use crate::error::ScalarustError;
use crate::ops::traits::numeric::ScalarNumeric;
use crate::value::{ParentLink, Value};
use crate::value_data::ValueData;
use std::collections::HashMap;
use std::sync::RwLock;

/// Gradients computed by a pass, written to the nodes only once the whole
/// pass succeeded.
struct StagedGrads<T: ScalarNumeric> {
    grads: HashMap<*const RwLock<ValueData<T>>, (Value<T>, T)>,
}

impl<T: ScalarNumeric> StagedGrads<T> {
    fn new() -> Self {
        StagedGrads {
            grads: HashMap::new(),
        }
    }

    /// Staged gradient of `node`, or the one it currently holds.
    fn get(&self, node: &Value<T>) -> T {
        self.grads
            .get(&node.id_ptr())
            .map_or_else(|| node.grad(), |(_, grad)| *grad)
    }

    fn set(&mut self, node: &Value<T>, grad: T) {
        self.grads.insert(node.id_ptr(), (node.clone(), grad));
    }

    fn add(&mut self, node: &Value<T>, contribution: T) {
        self.grads
            .entry(node.id_ptr())
            .or_insert_with(|| (node.clone(), T::zero()))
            .1 += contribution;
    }

    fn commit(self) -> usize {
        let count = self.grads.len();
        for (node, grad) in self.grads.into_values() {
            node.write_data().grad = grad;
        }
        count
    }
}

/// Reverse topological pass from `root`.
///
/// Every node reachable from `root` starts from zero, `root` gets 1, then
/// each interior node adds `grad * local_derivative(slot)` into the operand
/// in every slot. A node consumed by several operations therefore receives
/// the sum of the contributions of all its consumers inside the graph.
pub(crate) fn accumulate<T: ScalarNumeric>(root: &Value<T>) -> Result<(), ScalarustError> {
    let order = topological_order(root);
    let mut staged = StagedGrads::new();
    for node in &order {
        staged.set(node, T::zero());
    }
    staged.set(root, T::one());

    for node in order.iter().rev() {
        let grad = staged.get(node);
        check_finite_grad(node, grad)?;
        let (op, children) = {
            let guard = node.read_data();
            (guard.op, guard.children.clone())
        };
        let Some(op) = op else {
            continue;
        };
        let operands: Vec<T> = children.iter().map(Value::data).collect();
        for (slot, child) in children.iter().enumerate() {
            staged.add(child, grad * op.local_derivative(slot, &operands));
        }
    }

    let graded = staged.commit();
    log::debug!("backward (accumulate): graded {} nodes", graded);
    Ok(())
}

/// Pre-order walk from `root` following the single-parent rule.
///
/// A node that was never consumed gets 1. A node whose most recent consumer
/// has been dropped gets 0: that consumer never received a gradient.
/// Otherwise its gradient is `parent.grad * partial(parent wrt node)`, where
/// `parent` is the most recent consumer of the node, wherever it lives.
/// Children are visited in recorded order, and a child reached through
/// several slots or paths is graded again each time.
pub(crate) fn last_consumer<T: ScalarNumeric>(root: &Value<T>) -> Result<(), ScalarustError> {
    warn_shared_nodes(root);

    let mut staged = StagedGrads::new();
    let mut stack = vec![root.clone()];
    let mut visits = 0usize;
    while let Some(node) = stack.pop() {
        visits += 1;
        let grad = match node.parent_link() {
            ParentLink::Unconsumed => T::one(),
            ParentLink::Dropped => {
                log::debug!(
                    "node {} was last consumed by a dropped value",
                    node.display_label()
                );
                T::zero()
            }
            ParentLink::Live(parent) => {
                let (parent_op, siblings) = {
                    let guard = parent.read_data();
                    (guard.op, guard.children.clone())
                };
                let op = parent_op.ok_or_else(|| {
                    ScalarustError::InternalError(format!(
                        "parent of {} has no operation",
                        node.display_label()
                    ))
                })?;
                staged.get(&parent) * op.partial_wrt(&node, &siblings)
            }
        };
        check_finite_grad(&node, grad)?;
        staged.set(&node, grad);

        let children = node.children();
        stack.extend(children.into_iter().rev());
    }

    staged.commit();
    log::debug!("backward (last consumer): {} visits", visits);
    Ok(())
}

/// Logs every node under `root` whose gradient the single-parent rule
/// will get wrong because it feeds more than one operation.
fn warn_shared_nodes<T: ScalarNumeric>(root: &Value<T>) {
    for node in topological_order(root) {
        let consumers = node.consumer_count();
        if consumers > 1 {
            log::warn!(
                "node {} has {} consumers; only its last consumer contributes to its gradient",
                node.display_label(),
                consumers
            );
        }
    }
}

fn check_finite_grad<T: ScalarNumeric>(node: &Value<T>, grad: T) -> Result<(), ScalarustError> {
    if grad.is_finite() {
        Ok(())
    } else {
        Err(ScalarustError::NonFiniteGradient {
            label: node.display_label(),
            value: grad.to_f64().unwrap_or(f64::NAN),
        })
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
