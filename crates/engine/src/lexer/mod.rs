// crates/engine/src/lexer/mod.rs
//! # Lexical Mode State Machine
//!
//! 1 文字ずつ受け取り、現在のモードと深さカウンタを更新しながら
//! [`ClassifiedRun`] を出力する。言語ごとの違いはすべて
//! [`LanguageProfile`] から引く。
//!
//! | Mode               | 終了条件                                  |
//! |--------------------|-------------------------------------------|
//! | `QuotedLiteral`    | エスケープされていない同じ引用符 / 行末   |
//! | `LineComment`      | 行末                                      |
//! | `BlockComment`     | 終端列 (行をまたぐ)                       |
//! | `PreprocessorLine` | バックスラッシュで終わらない行の行末      |
//! | `PlainText`        | なし                                      |

pub mod state;

pub use state::{ClassifiedRun, LexClass, LineEvents, Mode, ScanState};

use crate::language::{CommentClose, LanguageProfile, profile::sequence_matches};
use state::DelimiterTail;

pub const FORM_FEED: char = '\x0c';

/// 出力から取り除く制御文字 (単語の区切りにはなる)
#[inline]
#[must_use]
pub const fn is_suppressed(ch: char) -> bool {
    matches!(ch, '\0' | '\r' | FORM_FEED)
}

/// 言語プロファイルに従う字句状態機械
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'p> {
    profile: &'p LanguageProfile,
}

impl<'p> Lexer<'p> {
    #[must_use]
    pub const fn new(profile: &'p LanguageProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub const fn profile(&self) -> &'p LanguageProfile {
        self.profile
    }

    #[must_use]
    pub fn initial_state(&self) -> ScanState {
        ScanState::new(self.profile.is_plain_text())
    }

    /// 1 行 (改行を除いた内容) を処理する
    ///
    /// `detect` は単語が関数定義を始めるかを問い合わせる。引数は単語直後からの
    /// 行の残り。
    pub fn scan_line<F>(
        &self,
        state: &mut ScanState,
        content: &str,
        newline: bool,
        out: &mut Vec<ClassifiedRun>,
        mut detect: F,
    ) where
        F: FnMut(&str) -> bool,
    {
        let mut chars = content.char_indices().peekable();
        while let Some((idx, ch)) = chars.next() {
            let next = chars.peek().map(|&(_, c)| c);
            self.advance(state, ch, next, out, || detect(&content[idx..]));
        }
        self.finish_line(state, newline, out, || detect(""));
    }

    /// 1 文字を処理し、完成した run を `out` に追加する
    ///
    /// `next` は同じ行の次の文字 (2 文字区切りの判定用)。
    pub fn advance<F>(
        &self,
        state: &mut ScanState,
        ch: char,
        next: Option<char>,
        out: &mut Vec<ClassifiedRun>,
        detect: F,
    ) where
        F: FnOnce() -> bool,
    {
        if ch == FORM_FEED {
            state.events.form_feed = true;
        }

        match std::mem::take(&mut state.tail) {
            DelimiterTail::Opener => push_char(state, out, LexClass::Comment, ch),
            DelimiterTail::Closer => {
                push_char(state, out, LexClass::Comment, ch);
                state.mode = state.base_mode();
            }
            DelimiterTail::None => match state.mode {
                Mode::Normal | Mode::PreprocessorLine => {
                    self.advance_code(state, ch, next, out, detect);
                }
                Mode::QuotedLiteral { quote } => advance_literal(state, quote, ch, out),
                Mode::LineComment => {
                    if !is_suppressed(ch) {
                        push_char(state, out, LexClass::Comment, ch);
                    }
                }
                Mode::BlockComment { close } => advance_block_comment(state, close, ch, next, out),
                Mode::PlainText => {
                    if !is_suppressed(ch) {
                        push_char(state, out, LexClass::PlainText, ch);
                    }
                }
            },
        }

        if !ch.is_whitespace() && !is_suppressed(ch) {
            state.saw_non_blank = true;
        }
        state.last_char = Some(ch);
    }

    /// 行末の処理: 行コメント・文字列の暗黙の終了と指令行の継続判定
    pub fn finish_line<F>(
        &self,
        state: &mut ScanState,
        newline: bool,
        out: &mut Vec<ClassifiedRun>,
        detect: F,
    ) where
        F: FnOnce() -> bool,
    {
        if std::mem::take(&mut state.tail) == DelimiterTail::Closer {
            state.mode = state.base_mode();
        }
        match state.mode {
            Mode::QuotedLiteral { .. } => {
                state.last_was_backslash = false;
                state.mode = state.base_mode();
            }
            Mode::LineComment => state.mode = state.base_mode(),
            _ => {}
        }

        if state.mode.is_code() {
            self.flush_word(state, out, detect);
            let continued = newline && state.last_char == Some('\\');
            if !continued {
                state.saw_directive = false;
                state.mode = Mode::Normal;
            }
        }

        complete_pending(state, out);
        state.saw_non_blank = false;
        state.last_char = None;
    }

    fn advance_code<F>(
        &self,
        state: &mut ScanState,
        ch: char,
        next: Option<char>,
        out: &mut Vec<ClassifiedRun>,
        detect: F,
    ) where
        F: FnOnce() -> bool,
    {
        if self.profile.is_word_char(ch) {
            state.word.push(ch);
            return;
        }
        self.flush_word(state, out, detect);

        if is_suppressed(ch) {
            return;
        }
        if self.profile.is_quote(ch) {
            state.last_was_backslash = false;
            state.mode = Mode::QuotedLiteral { quote: ch };
            push_char(state, out, LexClass::Literal, ch);
            return;
        }
        if self.profile.directive_marker() == Some(ch) && !state.saw_non_blank {
            state.saw_directive = true;
            state.mode = Mode::PreprocessorLine;
        }

        let rules = self.profile.depth_rules();
        match ch {
            '{' if rules.braces => state.func_depth += 1,
            '}' if rules.braces => state.func_depth -= 1,
            '(' if rules.parens => state.paren_depth += 1,
            ')' if rules.parens => state.paren_depth -= 1,
            '[' if rules.brackets => state.bracket_depth += 1,
            ']' if rules.brackets => state.bracket_depth -= 1,
            _ => {}
        }

        match self.profile.comment_opening(ch, next) {
            Some(syntax) => {
                state.mode = match syntax.close {
                    CommentClose::EndOfLine => Mode::LineComment,
                    CommentClose::Sequence(close) => Mode::BlockComment { close },
                };
                if syntax.open.chars().nth(1).is_some() {
                    state.tail = DelimiterTail::Opener;
                }
                push_char(state, out, LexClass::Comment, ch);
            }
            None => push_char(state, out, LexClass::Normal, ch),
        }
    }

    /// 単語を確定させ、予約語・マーカー・関数名を判定する
    fn flush_word<F>(&self, state: &mut ScanState, out: &mut Vec<ClassifiedRun>, detect: F)
    where
        F: FnOnce() -> bool,
    {
        if state.word.is_empty() {
            return;
        }
        let word = std::mem::take(&mut state.word);

        if !state.saw_directive && self.profile.is_keyword(&word) {
            if let Some(delta) = self.profile.marker_delta(&word) {
                state.func_depth += delta;
                if delta > 0 && self.profile.name_follows_marker() {
                    state.name_search = true;
                }
            }
            push_word(state, out, LexClass::Keyword, word);
            return;
        }

        let is_function = if state.name_search && state.bracket_depth == 0 {
            state.name_search = false;
            true
        } else {
            state.func_depth == 0 && !state.saw_directive && detect()
        };

        if is_function {
            log::debug!("function '{word}' at line {}", state.line);
            state.function = Some(word.clone());
            state.events.function = Some(word.clone());
            push_word(state, out, LexClass::FunctionName, word);
        } else {
            push_word(state, out, LexClass::Normal, word);
        }
    }
}

fn advance_literal(state: &mut ScanState, quote: char, ch: char, out: &mut Vec<ClassifiedRun>) {
    if is_suppressed(ch) {
        state.last_was_backslash = false;
        return;
    }
    push_char(state, out, LexClass::Literal, ch);
    if ch == quote && !state.last_was_backslash {
        state.mode = state.base_mode();
        return;
    }
    state.last_was_backslash = ch == '\\' && !state.last_was_backslash;
}

fn advance_block_comment(
    state: &mut ScanState,
    close: &'static str,
    ch: char,
    next: Option<char>,
    out: &mut Vec<ClassifiedRun>,
) {
    if is_suppressed(ch) {
        return;
    }
    push_char(state, out, LexClass::Comment, ch);
    if sequence_matches(close, ch, next) {
        if close.chars().nth(1).is_some() {
            state.tail = DelimiterTail::Closer;
        } else {
            state.mode = state.base_mode();
        }
    }
}

fn push_char(state: &mut ScanState, out: &mut Vec<ClassifiedRun>, class: LexClass, ch: char) {
    if let Some(run) = state.pending.as_mut() {
        if run.class == class {
            run.text.push(ch);
            return;
        }
    }
    if let Some(done) = state.pending.replace(ClassifiedRun::new(class, ch)) {
        out.push(done);
    }
}

fn push_word(state: &mut ScanState, out: &mut Vec<ClassifiedRun>, class: LexClass, word: String) {
    if let Some(run) = state.pending.as_mut() {
        if run.class == class {
            run.text.push_str(&word);
            return;
        }
    }
    if let Some(done) = state.pending.replace(ClassifiedRun::new(class, word)) {
        out.push(done);
    }
}

fn complete_pending(state: &mut ScanState, out: &mut Vec<ClassifiedRun>) {
    if let Some(run) = state.pending.take() {
        out.push(run);
    }
}
