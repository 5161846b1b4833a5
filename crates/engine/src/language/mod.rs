// crates/engine/src/language/mod.rs
pub mod keywords;
pub mod profile;

use std::path::Path;
use std::str::FromStr;

pub use profile::{CommentClose, CommentSyntax, DepthRules, LanguageProfile, WordChars};

/// 注釈対象の言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    C,
    Cpp,
    Trellis,
    Verilog,
    Vera,
    #[default]
    PlainText,
}

impl Language {
    pub const ALL: [Self; 6] = [
        Self::C,
        Self::Cpp,
        Self::Trellis,
        Self::Verilog,
        Self::Vera,
        Self::PlainText,
    ];

    /// 拡張子 (ドットなし、大文字小文字を区別) から言語を決める
    ///
    /// 未知の拡張子はプレーンテキストとして扱う。
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "c" | "h" => Self::C,
            "cxx" | "hxx" | "icc" | "cpp" | "hpp" | "C" | "H" | "cc" | "hh" | "CC" | "HH" => {
                Self::Cpp
            }
            "verilog" | "v" | "vh" | "vs" => Self::Verilog,
            "vr" | "vrh" => Self::Vera,
            "trellis" => Self::Trellis,
            _ => Self::PlainText,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::PlainText, Self::from_extension)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "c++",
            Self::Trellis => "trellis",
            Self::Verilog => "verilog",
            Self::Vera => "vera",
            Self::PlainText => "text",
        }
    }

    #[must_use]
    pub fn profile(self) -> LanguageProfile {
        LanguageProfile::for_language(self)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(Self::C),
            "c++" | "cpp" => Ok(Self::Cpp),
            "trellis" => Ok(Self::Trellis),
            "verilog" => Ok(Self::Verilog),
            "vera" => Ok(Self::Vera),
            "text" | "plain" => Ok(Self::PlainText),
            other => Err(format!(
                "unknown language '{other}' (expected c, c++, trellis, verilog, vera or text)"
            )),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
