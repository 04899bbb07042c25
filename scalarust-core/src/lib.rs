// Main modules of the crate
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod error;
pub mod utils;

// Re-export the Value type so it is reachable as `scalarust_core::Value`
pub use value::{leaf, ParentLink, Value};
pub use ops::operation::Operation;
pub use ops::traits::numeric::ScalarNumeric;
pub use autograd::BackwardMode;
pub use error::ScalarustError;
// Re-export traits required by public functions/structs
pub use num_traits;
