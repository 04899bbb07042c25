// src/value/autograd_methods.rs

use crate::autograd::{backward, BackwardMode};
use crate::error::ScalarustError;
use crate::ops::traits::numeric::ScalarNumeric;
use crate::value::Value;

impl<T: ScalarNumeric> Value<T> {
    /// Computes the gradient of this node with respect to every node it was
    /// computed from, accumulating over all uses of shared operands.
    ///
    /// Equivalent to `backward_with(BackwardMode::Accumulate)`.
    pub fn backward(&self) -> Result<(), ScalarustError> {
        self.backward_with(BackwardMode::Accumulate)
    }

    /// Runs the backward pass from this node with an explicit propagation mode.
    ///
    /// Gradients are written only when the whole pass succeeds: on
    /// `NonFiniteGradient` every node keeps the gradient it had before.
    pub fn backward_with(&self, mode: BackwardMode) -> Result<(), ScalarustError> {
        log::debug!("backward() from {} in {:?} mode", self.display_label(), mode);
        match mode {
            BackwardMode::Accumulate => backward::accumulate(self),
            BackwardMode::LastConsumer => backward::last_consumer(self),
        }
    }
}
