// crates/engine/src/language/profile.rs
//! # Language Profile
//!
//! 言語ごとの字句規則をデータとして保持する。字句状態機械と関数先読みは
//! このテーブルだけを参照し、言語による分岐を持たない。
//!
//! | Language | Comments        | Quotes  | Depth          | Markers                  |
//! |----------|-----------------|---------|----------------|--------------------------|
//! | C / C++  | `//`, `/* */`   | `"` `'` | braces         | -                        |
//! | Verilog  | `//`, `/* */`   | `"`     | paren, bracket | module / task / function |
//! | Vera     | `//`, `/* */`   | `"`     | -              | -                        |
//! | Trellis  | `!`             | `"`     | -              | -                        |

use hashbrown::HashSet;

use super::{Language, keywords};

/// 単語を構成する文字の集合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordChars {
    /// 英数字, `_`, `$`
    CLike,
    /// 英数字, `_`, `#`, `?`
    Trellis,
}

impl WordChars {
    #[inline]
    #[must_use]
    pub const fn contains(self, ch: char) -> bool {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            return true;
        }
        match self {
            Self::CLike => ch == '$',
            Self::Trellis => ch == '#' || ch == '?',
        }
    }
}

/// コメントの終端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentClose {
    EndOfLine,
    /// 1〜2 文字の終端列
    Sequence(&'static str),
}

/// コメント構文 (開始列は 1〜2 文字)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    pub open: &'static str,
    pub close: CommentClose,
}

/// 意味を持つ深さカウンタ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DepthRules {
    pub braces: bool,
    pub parens: bool,
    pub brackets: bool,
}

const C_COMMENTS: &[CommentSyntax] = &[
    CommentSyntax {
        open: "//",
        close: CommentClose::EndOfLine,
    },
    CommentSyntax {
        open: "/*",
        close: CommentClose::Sequence("*/"),
    },
];

const TRELLIS_COMMENTS: &[CommentSyntax] = &[CommentSyntax {
    open: "!",
    close: CommentClose::EndOfLine,
}];

const VERILOG_MARKERS: &[(&str, i32)] = &[
    ("module", 1),
    ("endmodule", -1),
    ("task", 1),
    ("endtask", -1),
    ("function", 1),
    ("endfunction", -1),
];

/// `seq` が `ch` (と同じ行の次の文字 `next`) で始まるか
#[inline]
#[must_use]
pub fn sequence_matches(seq: &str, ch: char, next: Option<char>) -> bool {
    let mut chars = seq.chars();
    if chars.next() != Some(ch) {
        return false;
    }
    chars.next().is_none_or(|second| next == Some(second))
}

/// 不変の言語記述子
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    language: Language,
    keywords: HashSet<&'static str>,
    word_chars: WordChars,
    comments: &'static [CommentSyntax],
    quotes: &'static [char],
    markers: &'static [(&'static str, i32)],
    name_follows_marker: bool,
    depth: DepthRules,
    directive: Option<char>,
}

impl LanguageProfile {
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::C => Self::brace_language(language, keywords::C),
            Language::Cpp => Self::brace_language(language, keywords::CPP),
            Language::Verilog => Self {
                markers: VERILOG_MARKERS,
                name_follows_marker: true,
                depth: DepthRules {
                    braces: false,
                    parens: true,
                    brackets: true,
                },
                ..Self::base(language, keywords::VERILOG, C_COMMENTS)
            },
            Language::Vera => Self::base(language, keywords::VERA, C_COMMENTS),
            Language::Trellis => Self {
                word_chars: WordChars::Trellis,
                ..Self::base(language, keywords::TRELLIS, TRELLIS_COMMENTS)
            },
            Language::PlainText => Self::base(language, &[], &[]),
        }
    }

    fn base(
        language: Language,
        words: &'static [&'static str],
        comments: &'static [CommentSyntax],
    ) -> Self {
        Self {
            language,
            keywords: words.iter().copied().collect(),
            word_chars: WordChars::CLike,
            comments,
            quotes: &['"'],
            markers: &[],
            name_follows_marker: false,
            depth: DepthRules::default(),
            directive: None,
        }
    }

    fn brace_language(language: Language, words: &'static [&'static str]) -> Self {
        Self {
            quotes: &['"', '\''],
            depth: DepthRules {
                braces: true,
                parens: false,
                brackets: false,
            },
            directive: Some('#'),
            ..Self::base(language, words, C_COMMENTS)
        }
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[inline]
    #[must_use]
    pub fn is_plain_text(&self) -> bool {
        self.language == Language::PlainText
    }

    #[inline]
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    #[inline]
    #[must_use]
    pub const fn is_word_char(&self, ch: char) -> bool {
        self.word_chars.contains(ch)
    }

    #[inline]
    #[must_use]
    pub fn is_quote(&self, ch: char) -> bool {
        self.quotes.contains(&ch)
    }

    #[inline]
    #[must_use]
    pub const fn comments(&self) -> &'static [CommentSyntax] {
        self.comments
    }

    /// `ch` (と `next`) で始まるコメント構文
    #[must_use]
    pub fn comment_opening(&self, ch: char, next: Option<char>) -> Option<CommentSyntax> {
        self.comments
            .iter()
            .find(|c| sequence_matches(c.open, ch, next))
            .copied()
    }

    /// 関数境界マーカーなら深さの増減を返す
    #[must_use]
    pub fn marker_delta(&self, word: &str) -> Option<i32> {
        self.markers
            .iter()
            .find(|(marker, _)| *marker == word)
            .map(|&(_, delta)| delta)
    }

    #[inline]
    #[must_use]
    pub const fn name_follows_marker(&self) -> bool {
        self.name_follows_marker
    }

    #[inline]
    #[must_use]
    pub const fn depth_rules(&self) -> DepthRules {
        self.depth
    }

    /// プリプロセッサ指令の開始文字 (`#`)
    #[inline]
    #[must_use]
    pub const fn directive_marker(&self) -> Option<char> {
        self.directive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters_are_at_most_two_chars() {
        for lang in Language::ALL {
            for syntax in lang.profile().comments() {
                assert!((1..=2).contains(&syntax.open.chars().count()));
                if let CommentClose::Sequence(close) = syntax.close {
                    assert!((1..=2).contains(&close.chars().count()));
                }
            }
        }
    }

    #[test]
    fn test_comment_opening() {
        let c = Language::C.profile();
        assert_eq!(c.comment_opening('/', Some('/')).map(|s| s.close), Some(CommentClose::EndOfLine));
        assert_eq!(
            c.comment_opening('/', Some('*')).map(|s| s.close),
            Some(CommentClose::Sequence("*/"))
        );
        assert!(c.comment_opening('/', Some(' ')).is_none());
        assert!(c.comment_opening('/', None).is_none());

        let trellis = Language::Trellis.profile();
        assert!(trellis.comment_opening('!', None).is_some());
        assert!(trellis.comment_opening('/', Some('/')).is_none());
    }

    #[test]
    fn test_word_chars() {
        let c = Language::C.profile();
        assert!(c.is_word_char('$'));
        assert!(!c.is_word_char('#'));
        let trellis = Language::Trellis.profile();
        assert!(trellis.is_word_char('#'));
        assert!(trellis.is_word_char('?'));
        assert!(!trellis.is_word_char('$'));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let c = Language::C.profile();
        assert!(c.is_keyword("while"));
        assert!(!c.is_keyword("While"));
        assert!(!Language::PlainText.profile().is_keyword("while"));
    }

    #[test]
    fn test_markers_and_quotes() {
        let verilog = Language::Verilog.profile();
        assert_eq!(verilog.marker_delta("module"), Some(1));
        assert_eq!(verilog.marker_delta("endtask"), Some(-1));
        assert_eq!(verilog.marker_delta("always"), None);
        assert!(verilog.name_follows_marker());
        assert!(!verilog.is_quote('\''));
        assert!(Language::Cpp.profile().is_quote('\''));
        assert_eq!(Language::C.profile().directive_marker(), Some('#'));
        assert_eq!(Language::Vera.profile().directive_marker(), None);
    }
}
