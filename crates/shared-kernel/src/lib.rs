// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    C2psError, ConfigError, ConfigResult, ErrorContext, InputError, InputResult, OutputError,
    OutputResult, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{ColumnCount, LineCount, PageCount};
