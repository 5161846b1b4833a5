// crates/engine/src/lexer/state.rs
use c2ps_shared_kernel::LineCount;

use crate::render::Style;

/// 現在の字句モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    QuotedLiteral { quote: char },
    LineComment,
    BlockComment { close: &'static str },
    PreprocessorLine,
    PlainText,
}

impl Mode {
    #[inline]
    #[must_use]
    pub const fn is_code(self) -> bool {
        matches!(self, Self::Normal | Self::PreprocessorLine)
    }
}

/// 字句クラス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexClass {
    Normal,
    Keyword,
    Literal,
    Comment,
    /// 関数定義を始めると判定された単語
    FunctionName,
    PlainText,
}

impl LexClass {
    /// 本文中での描画スタイル (関数名は本文では通常のコードとして描く)
    #[must_use]
    pub const fn body_style(self) -> Style {
        match self {
            Self::Normal | Self::FunctionName => Style::Normal,
            Self::Keyword => Style::Keyword,
            Self::Literal => Style::Literal,
            Self::Comment => Style::Comment,
            Self::PlainText => Style::PlainText,
        }
    }
}

/// 1 つの字句クラスに属する連続した文字列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRun {
    pub class: LexClass,
    pub text: String,
}

impl ClassifiedRun {
    #[must_use]
    pub fn new(class: LexClass, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
        }
    }
}

/// 2 文字区切りの 2 文字目を待っている状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum DelimiterTail {
    #[default]
    None,
    Opener,
    Closer,
}

/// 行の処理中に生じたレイアウト向けの出来事
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEvents {
    /// この行で見つかった関数名
    pub function: Option<String>,
    /// 改ページ文字を含んでいた
    pub form_feed: bool,
}

/// 1 入力を走査する間の字句状態
///
/// 入力ごとに作り直す。先読みはこの状態を変更しない。
#[derive(Debug, Clone)]
pub struct ScanState {
    pub(crate) mode: Mode,
    pub(crate) func_depth: i32,
    pub(crate) paren_depth: i32,
    pub(crate) bracket_depth: i32,
    pub(crate) last_was_backslash: bool,
    pub(crate) saw_directive: bool,
    pub(crate) saw_non_blank: bool,
    pub(crate) name_search: bool,
    pub(crate) word: String,
    pub(crate) pending: Option<ClassifiedRun>,
    pub(crate) tail: DelimiterTail,
    pub(crate) last_char: Option<char>,
    pub(crate) function: Option<String>,
    pub(crate) events: LineEvents,
    pub(crate) line: LineCount,
}

impl ScanState {
    #[must_use]
    pub fn new(plain_text: bool) -> Self {
        Self {
            mode: if plain_text { Mode::PlainText } else { Mode::Normal },
            func_depth: 0,
            paren_depth: 0,
            bracket_depth: 0,
            last_was_backslash: false,
            saw_directive: false,
            saw_non_blank: false,
            name_search: false,
            word: String::new(),
            pending: None,
            tail: DelimiterTail::None,
            last_char: None,
            function: None,
            events: LineEvents::default(),
            line: LineCount::new(1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn func_depth(&self) -> i32 {
        self.func_depth
    }

    #[inline]
    #[must_use]
    pub const fn paren_depth(&self) -> i32 {
        self.paren_depth
    }

    #[inline]
    #[must_use]
    pub const fn bracket_depth(&self) -> i32 {
        self.bracket_depth
    }

    #[inline]
    #[must_use]
    pub const fn in_directive(&self) -> bool {
        self.saw_directive
    }

    /// 現在の (1 始まりの) 行番号
    #[inline]
    #[must_use]
    pub const fn line(&self) -> LineCount {
        self.line
    }

    /// 直近に見つかった関数名
    #[must_use]
    pub fn last_function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// 関数の途中にいるときの継続注釈用の名前
    #[must_use]
    pub fn continuation(&self) -> Option<&str> {
        if self.func_depth > 0 {
            self.last_function()
        } else {
            None
        }
    }

    /// 行の出来事を取り出してリセットする
    pub fn take_line_events(&mut self) -> LineEvents {
        std::mem::take(&mut self.events)
    }

    pub fn next_line(&mut self) {
        self.line.increment();
    }

    /// 基底モード (指令行の中なら `PreprocessorLine`)
    pub(crate) const fn base_mode(&self) -> Mode {
        if self.saw_directive {
            Mode::PreprocessorLine
        } else {
            Mode::Normal
        }
    }
}
