// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum C2psError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<C2psError>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, C2psError>;

/// 処理開始前に検出される設定エラー (致命的)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid page geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("Invalid page group {value}: must be one of 1, 2, 4, 8")]
    InvalidPageGroup { value: usize },

    #[error("Unknown language: {name}")]
    UnknownLanguage { name: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// 入力ファイル単位のエラー (そのファイルだけスキップされる)
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InputResult<T> = std::result::Result<T, InputError>;

/// 出力文書の書き込みエラー
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },
}

pub type OutputResult<T> = std::result::Result<T, OutputError>;

impl From<std::io::Error> for OutputError {
    fn from(err: std::io::Error) -> Self {
        Self::Write { source: err }
    }
}

impl From<std::io::Error> for C2psError {
    fn from(err: std::io::Error) -> Self {
        OutputError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    /// # Errors
    /// 元のエラーを `C2psError::Context` で包んで返す。
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// # Errors
    /// 元のエラーを遅延生成したコンテキストで包んで返す。
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<C2psError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| C2psError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| C2psError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
