use scalarust_core::autograd::topological_order;
use scalarust_core::{ScalarNumeric, Value};
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::fs;
use std::io;
use std::path::Path;

/// Writes the graph reachable from `root` as a Graphviz `digraph`.
///
/// Every value becomes a record box `label | data | grad`. An interior value
/// also gets a junction node showing its operation, with an edge into the
/// value and one edge from each operand slot into the junction.
pub fn write_dot<T: ScalarNumeric, W: Write>(root: &Value<T>, writer: &mut W) -> fmt::Result {
    let order = topological_order(root);
    let ids: HashMap<Value<T>, usize> = order
        .iter()
        .enumerate()
        .map(|(id, node)| (node.clone(), id))
        .collect();

    writeln!(writer, "digraph G {{")?;
    writeln!(writer, "    rankdir=\"LR\";")?;
    for (id, node) in order.iter().enumerate() {
        let label = escape_record(&node.label().unwrap_or_default());
        writeln!(
            writer,
            "    n{} [shape=record, label=\"{} | data {:.4} | grad {:.4}\"];",
            id,
            label,
            node.data(),
            node.grad()
        )?;
        let Some(op) = node.operation() else {
            continue;
        };
        writeln!(writer, "    n{}_op [label=\"{}\"];", id, op.symbol())?;
        writeln!(writer, "    n{}_op -> n{};", id, id)?;
        for child in node.children() {
            if let Some(child_id) = ids.get(&child) {
                writeln!(writer, "    n{} -> n{}_op;", child_id, id)?;
            }
        }
    }
    writeln!(writer, "}}")?;

    log::debug!("write_dot: rendered {} values", order.len());
    Ok(())
}

/// Renders the graph reachable from `root` into a DOT string.
pub fn to_dot<T: ScalarNumeric>(root: &Value<T>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_dot(root, &mut out)?;
    Ok(out)
}

/// Writes the DOT text for `root` to `path`, e.g. `nn.gv`.
pub fn save_dot<T: ScalarNumeric>(root: &Value<T>, path: impl AsRef<Path>) -> io::Result<()> {
    let text = to_dot(root).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, text)
}

/// Escapes characters with a meaning inside record labels.
fn escape_record(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        if matches!(ch, '"' | '\\' | '{' | '}' | '|' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
