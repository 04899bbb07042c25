//! Graphviz rendering of Scalarust computation graphs.
//!
//! Only reads the public accessors of `Value`: data, grad, label,
//! operation and children.

pub mod dot;

pub use dot::{save_dot, to_dot, write_dot};
