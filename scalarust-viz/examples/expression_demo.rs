// Builds L = a*b + c, back-propagates, cross-checks with finite differences
// and prints the graph as Graphviz DOT.
//
// RUST_LOG=debug cargo run -p scalarust-viz --example expression_demo

use scalarust_core::autograd::{numeric_gradient, DifferenceScheme, GradCheckConfig};
use scalarust_core::ops::{add_op, mul_op};
use scalarust_core::{leaf, ScalarustError, Value};
use std::error::Error;

fn expression(inputs: &[Value]) -> Result<Value, ScalarustError> {
    let product = mul_op(&inputs[0], &inputs[1])?;
    add_op(&product, &inputs[2])
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::builder().is_test(false).try_init();

    let a = leaf(2.0, "a")?;
    let b = leaf(-3.5, "b")?;
    let c = leaf(1.0, "c")?;
    let inputs = vec![a.clone(), b.clone(), c.clone()];

    let root = expression(&inputs)?;
    root.set_label("L");
    root.backward()?;
    println!(
        "L_grad={}, a_grad={}, b_grad={}, c_grad={}",
        root.grad(),
        a.grad(),
        b.grad(),
        c.grad()
    );

    let config = GradCheckConfig::default().with_scheme(DifferenceScheme::Forward);
    for (index, input) in inputs.iter().enumerate() {
        let estimate = numeric_gradient(expression, &inputs, index, &config)?;
        println!(
            "{}_grad (finite difference) = {:.6}",
            input.label().unwrap_or_default(),
            estimate
        );
    }

    println!("{}", scalarust_viz::to_dot(&root)?);
    Ok(())
}
