pub mod fixtures;

use swatch::{Platform, StyleRuntime};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Create a runtime with the standard fixture configuration installed.
pub fn configured_runtime(platform: Platform) -> StyleRuntime {
    let runtime = StyleRuntime::new(platform);
    runtime.set_config(fixtures::sample_config(platform));
    runtime
}
