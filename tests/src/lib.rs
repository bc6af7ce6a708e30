pub mod prelude;

pub use std_util::*;

use ormser::ModelSerializer;

/// Routes `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Names of the serializer's fields, in order.
pub fn field_names(serializer: &ModelSerializer) -> Vec<&str> {
    serializer.field_names().collect()
}
