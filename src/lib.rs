// src/lib.rs
//! c2ps: ソースコードを注釈付き PostScript リストに変換する
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod count;
pub mod header;
pub mod logging;
pub mod paper;
pub mod parsers;
pub mod postscript;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
