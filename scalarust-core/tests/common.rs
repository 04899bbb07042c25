use scalarust_core::Value;

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    // Only the first call has an effect; later ones fail quietly.
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Leaves `a = 2.0`, `b = -3.5`, `c = 1.0`.
#[allow(dead_code)]
pub fn abc() -> (Value, Value, Value) {
    (
        Value::with_label(2.0, "a").expect("Test value creation failed"),
        Value::with_label(-3.5, "b").expect("Test value creation failed"),
        Value::with_label(1.0, "c").expect("Test value creation failed"),
    )
}
