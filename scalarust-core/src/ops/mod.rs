// Graph Builder: node-producing operations and their derivative rules
pub mod arithmetic;
pub mod combine;
pub mod operation;
pub mod traits;

pub use arithmetic::{add_op, mul_op, product_op, sum_op};
pub use combine::combine;
pub use operation::Operation;
