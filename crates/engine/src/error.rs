// crates/engine/src/error.rs
use c2ps_shared_kernel::{C2psError, ConfigError, InputError, OutputError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid page group {0}: must be one of 1, 2, 4, 8")]
    InvalidPageGroup(usize),

    #[error("Invalid document options: {0}")]
    Options(String),

    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to render output: {0}")]
    Render(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<crate::config::DocumentOptionsBuilderError> for EngineError {
    fn from(err: crate::config::DocumentOptionsBuilderError) -> Self {
        Self::Options(err.to_string())
    }
}

impl From<EngineError> for C2psError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidGeometry(reason) => ConfigError::InvalidGeometry { reason }.into(),
            EngineError::InvalidPageGroup(value) => ConfigError::InvalidPageGroup { value }.into(),
            EngineError::Options(reason) => ConfigError::InvalidValue {
                field: "document options".to_string(),
                reason,
            }
            .into(),
            EngineError::Read(source) => InputError::Read {
                path: std::path::PathBuf::from("<input>"),
                source,
            }
            .into(),
            EngineError::Render(source) => OutputError::Write { source }.into(),
        }
    }
}
