// crates/engine/src/lib.rs
//! c2ps の注釈エンジン
//!
//! 言語プロファイルに従ってソースを字句分類し、関数定義を先読みで検出しながら
//! ページ割り付けを行い、結果を [`render::Renderer`] へ流す。

pub mod config;
pub mod document;
pub mod error;
pub mod language;
pub mod layout;
pub mod lexer;
pub mod lookahead;
pub mod render;
pub mod source;

pub use config::{DocumentOptions, DocumentOptionsBuilder, LayoutGeometry, PAGE_GROUPS};
pub use document::{Document, FileSummary};
pub use error::{EngineError, Result};
pub use language::{Language, LanguageProfile};
pub use render::{PageKind, RecordingRenderer, RenderEvent, Renderer, Style};
pub use source::{InputSource, LineSource};
