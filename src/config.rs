// src/config.rs
use std::path::{Path, PathBuf};

use c2ps_engine::{DocumentOptions, DocumentOptionsBuilder, Language, LayoutGeometry};
use c2ps_shared_kernel::{C2psError, ConfigError, Result};

use crate::args::Args;
use crate::postscript::{FontFamily, PostScriptSettings};

/// 標準入力 / 標準出力を表すパス
pub const STDIO_PATH: &str = "-";

/// 出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-o` の指定、なければ最初の入力から出力先を決める
    #[must_use]
    pub fn resolve(explicit: Option<&Path>, first_input: &Path) -> Self {
        let path = explicit.map_or_else(|| first_input.with_extension("ps"), Path::to_path_buf);
        if path.as_os_str() == STDIO_PATH || path.as_os_str() == "-.ps" {
            Self::Stdout
        } else {
            Self::File(path)
        }
    }

    /// 文書タイトルに使う名前
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Stdout => STDIO_PATH.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// 実行全体の設定 (引数を検証したもの)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inputs: Vec<PathBuf>,
    pub output: OutputTarget,
    /// 明示された言語 (なければ入力ごとに拡張子で判定)
    pub language: Option<Language>,
    pub document: DocumentOptions,
    pub postscript: PostScriptSettings,
    pub verbose: bool,
}

impl AppConfig {
    /// # Errors
    /// 用紙寸法やページグループが不正な場合、入力が 1 つもない場合
    pub fn from_args(args: Args) -> Result<Self> {
        let first = args.inputs.first().ok_or_else(|| ConfigError::InvalidValue {
            field: "inputs".to_string(),
            reason: "at least one input is required".to_string(),
        })?;
        let output = OutputTarget::resolve(args.output.output.as_deref(), first);

        let (width, height) = args.layout.paper.dimensions();
        let geometry = LayoutGeometry::for_paper(width, height, args.layout.rotate)
            .map_err(C2psError::from)?;
        let document = DocumentOptionsBuilder::default()
            .geometry(geometry)
            .page_group(args.layout.page_group)
            .build()
            .map_err(|e| C2psError::from(c2ps_engine::EngineError::from(e)))?;

        let postscript = PostScriptSettings {
            geometry,
            font: if args.layout.fixed {
                FontFamily::Fixed
            } else {
                FontFamily::Proportional
            },
            rotate: args.layout.rotate,
            duplex: args.output.duplex,
            bottom_text: args.output.bottom_text(),
            title: output.title(),
            creator: format!("c2ps {}", crate::VERSION),
        };

        Ok(Self {
            output,
            language: args.layout.lang,
            document,
            postscript,
            verbose: args.output.verbose,
            inputs: args.inputs,
        })
    }

    /// 入力に使う言語
    #[must_use]
    pub fn language_for(&self, input: &Path) -> Language {
        self.language.unwrap_or_else(|| {
            if input.as_os_str() == STDIO_PATH {
                Language::PlainText
            } else {
                Language::from_path(input)
            }
        })
    }
}
