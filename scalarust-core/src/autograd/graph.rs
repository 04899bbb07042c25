use crate::ops::traits::numeric::ScalarNumeric;
use crate::value::Value;
use crate::value_data::ValueData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Builds a topological sort of the graph reachable from `root` through
/// `children` edges: every operand comes before the nodes computed from it,
/// `root` comes last, and each node appears once.
///
/// Uses an explicit stack so graph depth is not limited by the call stack.
/// Identity is the node address, so a node shared by several operations is
/// visited once.
pub fn topological_order<T: ScalarNumeric>(root: &Value<T>) -> Vec<Value<T>> {
    let mut visited: HashSet<*const RwLock<ValueData<T>>> = HashSet::new();
    let mut sorted_list = Vec::new();
    // (node, children already pushed)
    let mut stack = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id_ptr()) {
            continue;
        }
        let children = node.children();
        stack.push((node, true));
        // Reverse so children are finished in recorded order.
        for child in children.into_iter().rev() {
            if !visited.contains(&child.id_ptr()) {
                stack.push((child, false));
            }
        }
    }

    log::trace!("topological_order: {} nodes", sorted_list.len());
    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
