// src/args.rs
use std::path::PathBuf;

use c2ps_engine::Language;
use clap::{Args as ClapArgs, Parser, ValueHint};

use crate::paper::PaperSize;
use crate::parsers;

#[derive(Parser, Debug)]
#[command(
    name = "c2ps",
    version,
    about = "ソースコードを注釈付き PostScript リストに変換する",
    after_help = "環境変数 C2PS_DEFAULTS の内容はコマンドライン引数の前に挿入される",
    args_override_self = true
)]
pub struct Args {
    #[command(flatten)]
    pub layout: LayoutOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// 入力ファイル (`-` は標準入力)
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct LayoutOptions {
    /// 言語 (c, c++, trellis, verilog, vera, text); 省略時は拡張子から判定
    #[arg(long, value_parser = parsers::parse_language, help_heading = "レイアウト")]
    pub lang: Option<Language>,

    /// 用紙サイズ
    #[arg(long, value_enum, default_value = "letter", help_heading = "レイアウト")]
    pub paper: PaperSize,

    /// 横置きで印刷
    #[arg(long, help_heading = "レイアウト")]
    pub rotate: bool,

    /// 入力ごとのページ数をこの倍数に空白ページで揃える (1, 2, 4, 8)
    #[arg(long, default_value = "1", value_parser = parsers::parse_page_group, help_heading = "レイアウト")]
    pub page_group: usize,

    /// 等幅フォント (Courier) で本文を描く
    #[arg(long, overrides_with = "proportional", help_heading = "レイアウト")]
    pub fixed: bool,

    /// プロポーショナルフォント (Times) で本文を描く [既定]
    #[arg(long, overrides_with = "fixed", help_heading = "レイアウト")]
    pub proportional: bool,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutputOptions {
    /// 出力先 (`-` は標準出力); 省略時は最初の入力の拡張子を .ps に替えたもの
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 両面印刷を指定する
    #[arg(long, help_heading = "出力")]
    pub duplex: bool,

    /// 下部に "Internal Use Only" を入れる
    #[arg(long, overrides_with_all = ["confidential", "restricted", "bottom"], help_heading = "出力")]
    pub internal: bool,

    /// 下部に "Confidential" を入れる
    #[arg(long, overrides_with_all = ["internal", "restricted", "bottom"], help_heading = "出力")]
    pub confidential: bool,

    /// 下部に "Restricted Distribution" を入れる
    #[arg(long, overrides_with_all = ["internal", "confidential", "bottom"], help_heading = "出力")]
    pub restricted: bool,

    /// 下部に任意の文字列を入れる
    #[arg(long, value_name = "TEXT", overrides_with_all = ["internal", "confidential", "restricted"], help_heading = "出力")]
    pub bottom: Option<String>,

    /// 詳細なログを出す
    #[arg(short, long)]
    pub verbose: bool,
}

impl OutputOptions {
    /// 指定された下部テキスト
    #[must_use]
    pub fn bottom_text(&self) -> Option<String> {
        if self.internal {
            Some("Internal Use Only".to_string())
        } else if self.confidential {
            Some("Confidential".to_string())
        } else if self.restricted {
            Some("Restricted Distribution".to_string())
        } else {
            self.bottom.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["c2ps", "a.c"]).unwrap();
        assert_eq!(args.layout.paper, PaperSize::Letter);
        assert_eq!(args.layout.page_group, 1);
        assert!(args.layout.lang.is_none());
        assert!(!args.layout.proportional);
        assert!(args.output.bottom_text().is_none());
    }

    #[test]
    fn test_later_options_win() {
        let args = Args::try_parse_from([
            "c2ps", "--internal", "--proportional", "--rotate", "--fixed", "--bottom", "Draft",
            "--rotate", "a.c",
        ])
        .unwrap();
        assert_eq!(args.output.bottom_text().as_deref(), Some("Draft"));
        assert!(args.layout.fixed);
        assert!(!args.layout.proportional);
        assert!(args.layout.rotate);
    }

    #[test]
    fn test_inputs_required() {
        assert!(Args::try_parse_from(["c2ps"]).is_err());
        assert!(Args::try_parse_from(["c2ps", "--page-group", "3", "a.c"]).is_err());
        assert!(Args::try_parse_from(["c2ps", "--lang", "cobol", "a.c"]).is_err());
    }

    #[test]
    fn test_stdin_input() {
        let args = Args::try_parse_from(["c2ps", "--lang", "c", "-"]).unwrap();
        assert_eq!(args.inputs, [PathBuf::from("-")]);
        assert_eq!(args.layout.lang, Some(Language::C));
    }
}
