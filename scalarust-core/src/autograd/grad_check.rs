use crate::error::ScalarustError;
use crate::ops::traits::numeric::ScalarNumeric;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Finite-difference formula used by `numeric_gradient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifferenceScheme {
    /// `(f(x + h) - f(x)) / h`, error O(h).
    Forward,
    /// `(f(x + h) - f(x - h)) / 2h`, error O(h^2).
    #[default]
    Central,
}

/// Settings for gradient checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation step `h`.
    pub epsilon: f64,
    /// Accepted absolute or relative difference between analytic and numeric gradients.
    pub tolerance: f64,
    pub scheme: DifferenceScheme,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-3,
            tolerance: 1e-2,
            scheme: DifferenceScheme::Central,
        }
    }
}

impl GradCheckConfig {
    pub fn new(epsilon: f64, tolerance: f64) -> Self {
        GradCheckConfig {
            epsilon,
            tolerance,
            ..Default::default()
        }
    }

    pub fn with_scheme(mut self, scheme: DifferenceScheme) -> Self {
        self.scheme = scheme;
        self
    }
}

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index} ({label:?}): Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        label: Option<String>,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarustError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarustError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(upper): {upper:?}, f(lower): {lower:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        upper: f64,
        lower: f64,
    },
    #[error("Finite-difference step must be finite and positive, got {0}")]
    InvalidStep(f64),
    #[error("Input index {index} out of range for {len} inputs")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Value {0} cannot be represented in the element type")]
    CastFailed(f64),
    #[error("Value error during gradient check: {0}")]
    ValueError(ScalarustError),
}

// Map ScalarustError to GradCheckError::ValueError
impl From<ScalarustError> for GradCheckError {
    fn from(err: ScalarustError) -> Self {
        GradCheckError::ValueError(err)
    }
}

/// Approximates the derivative of `func` with respect to `inputs[index]`
/// by re-evaluating it on detached copies of `inputs`, the selected one
/// shifted by `config.epsilon`.
///
/// The graph `inputs` belong to is left untouched.
pub fn numeric_gradient<T, F>(
    func: F,
    inputs: &[Value<T>],
    index: usize,
    config: &GradCheckConfig,
) -> Result<T, GradCheckError>
where
    T: ScalarNumeric,
    F: Fn(&[Value<T>]) -> Result<Value<T>, ScalarustError>,
{
    let step: T = validate_step(config.epsilon)?;
    if index >= inputs.len() {
        return Err(GradCheckError::IndexOutOfRange {
            index,
            len: inputs.len(),
        });
    }

    let base = inputs[index].data();
    let (upper, lower, span) = match config.scheme {
        DifferenceScheme::Forward => (
            evaluate_perturbed(&func, inputs, index, base + step)?,
            evaluate_perturbed(&func, inputs, index, base)?,
            step,
        ),
        DifferenceScheme::Central => (
            evaluate_perturbed(&func, inputs, index, base + step)?,
            evaluate_perturbed(&func, inputs, index, base - step)?,
            step + step,
        ),
    };

    let numerical_grad = (upper - lower) / span;
    if !numerical_grad.is_finite() {
        return Err(GradCheckError::NumericalGradNaNOrInfinite {
            input_index: index,
            upper: upper.to_f64().unwrap_or(f64::NAN),
            lower: lower.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(numerical_grad)
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// Runs `func` on `inputs`, back-propagates from its output and compares the
/// gradient left on every input with `numeric_gradient`. Returns the
/// analytical gradients, in input order, when all of them agree.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[Value<T>],
    config: &GradCheckConfig,
) -> Result<Vec<T>, GradCheckError>
where
    T: ScalarNumeric,
    F: Fn(&[Value<T>]) -> Result<Value<T>, ScalarustError>,
{
    validate_step::<T>(config.epsilon)?;

    // Inputs outside the output's graph must read as zero.
    for input in inputs {
        input.zero_grad();
    }
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<T> = inputs.iter().map(Value::grad).collect();

    for (i, &analytical) in analytical_grads.iter().enumerate() {
        let numerical = numeric_gradient(&func, inputs, i, config)?;
        let analytical_grad = to_f64(analytical)?;
        let numerical_grad = to_f64(numerical)?;
        log::debug!(
            "check_grad: input {} analytical={} numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                label: inputs[i].label(),
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(analytical_grads)
}

fn evaluate_perturbed<T, F>(
    func: &F,
    inputs: &[Value<T>],
    index: usize,
    data: T,
) -> Result<T, GradCheckError>
where
    T: ScalarNumeric,
    F: Fn(&[Value<T>]) -> Result<Value<T>, ScalarustError>,
{
    let perturbed = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            if i != index {
                return Ok(input.detach());
            }
            match input.label() {
                Some(label) => Value::with_label(data, label),
                None => Value::new(data),
            }
        })
        .collect::<Result<Vec<_>, ScalarustError>>()?;

    let output = func(&perturbed).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.data())
}

fn validate_step<T: ScalarNumeric>(epsilon: f64) -> Result<T, GradCheckError> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(GradCheckError::InvalidStep(epsilon));
    }
    num_traits::cast::<f64, T>(epsilon).ok_or(GradCheckError::CastFailed(epsilon))
}

fn to_f64<T: ScalarNumeric>(value: T) -> Result<f64, GradCheckError> {
    value.to_f64().ok_or(GradCheckError::CastFailed(f64::NAN))
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
