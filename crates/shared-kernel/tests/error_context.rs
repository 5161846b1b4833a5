// crates/shared-kernel/tests/error_context.rs
use std::io;

use c2ps_shared_kernel::{C2psError, ConfigError, ErrorContext};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(C2psError::from)
        .context("writing listing")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("writing listing"));
    assert!(display.contains("Output error:"));
}

#[test]
fn with_context_is_lazy_and_keeps_source() {
    let result: Result<(), ConfigError> = Err(ConfigError::InvalidPageGroup { value: 3 });
    let err = result.with_context(|| format!("option {}", "--page-group")).unwrap_err();

    assert!(err.to_string().starts_with("option --page-group"));
    let source = std::error::Error::source(&err).expect("has source");
    assert!(source.to_string().contains("1, 2, 4, 8"));
}
