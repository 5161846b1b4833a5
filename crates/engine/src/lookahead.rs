// crates/engine/src/lookahead.rs
//! # Function-Boundary Lookahead
//!
//! 単語の直後から先を読み、括弧の釣り合いとコメント状態だけを追って
//! 関数定義の開始かどうかを判定する。走査は行の残りと最大
//! [`MAX_LOOKAHEAD_LINES`] 行まで。読み出し位置は判定の結果によらず復元される。

use crate::language::{CommentClose, LanguageProfile, profile::sequence_matches};
use crate::source::{InputSource, PositionGuard, split_newline};

/// 行の残りに続けて読む最大行数
pub const MAX_LOOKAHEAD_LINES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Function,
    NotFunction,
    Undecided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentState {
    None,
    Line,
    Block(&'static str),
}

/// 1 回の判定の間だけ存在する走査状態
#[derive(Debug)]
struct LookaheadFrame<'p> {
    profile: &'p LanguageProfile,
    comment: CommentState,
    paren_balance: i32,
    seen_paren: bool,
    lines_scanned: usize,
}

impl<'p> LookaheadFrame<'p> {
    const fn new(profile: &'p LanguageProfile) -> Self {
        Self {
            profile,
            comment: CommentState::None,
            paren_balance: 0,
            seen_paren: false,
            lines_scanned: 0,
        }
    }

    const fn closed(&self) -> bool {
        self.seen_paren && self.paren_balance == 0
    }

    fn scan_line(&mut self, line: &str) -> Verdict {
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            let next = chars.peek().copied();
            match self.comment {
                CommentState::Line => break,
                CommentState::Block(close) => {
                    if sequence_matches(close, ch, next) {
                        if close.chars().nth(1).is_some() {
                            chars.next();
                        }
                        self.comment = CommentState::None;
                    }
                    continue;
                }
                CommentState::None => {}
            }

            if let Some(syntax) = self.profile.comment_opening(ch, next) {
                if syntax.open.chars().nth(1).is_some() {
                    chars.next();
                }
                self.comment = match syntax.close {
                    CommentClose::EndOfLine => CommentState::Line,
                    CommentClose::Sequence(close) => CommentState::Block(close),
                };
                continue;
            }

            match ch {
                '(' => {
                    self.seen_paren = true;
                    self.paren_balance += 1;
                }
                ')' => self.paren_balance -= 1,
                // コメントにならない `/` は式の一部
                '/' if self.profile.comments().iter().any(|c| c.open.starts_with('/')) => {
                    return Verdict::NotFunction;
                }
                ';' | ',' if self.paren_balance == 0 => return Verdict::NotFunction,
                ';' | ',' | ' ' | '\t' | '\r' | '\0' | '\x0c' => {}
                _ if !self.seen_paren => return Verdict::NotFunction,
                _ if self.paren_balance == 0 => return Verdict::Function,
                _ => {}
            }
        }
        self.end_of_line()
    }

    fn end_of_line(&mut self) -> Verdict {
        match self.comment {
            CommentState::Block(_) => return Verdict::Undecided,
            CommentState::Line => self.comment = CommentState::None,
            CommentState::None => {}
        }
        if !self.seen_paren {
            Verdict::NotFunction
        } else if self.paren_balance == 0 {
            Verdict::Function
        } else {
            Verdict::Undecided
        }
    }
}

/// `rest_of_line` (単語の直後から行末まで) と後続行から、直前の単語が
/// 関数定義を始めるかを判定する
///
/// 入力の読み出し位置は呼び出し前と同じ位置に戻される。読み出しやシークに
/// 失敗した場合は警告を出して `false` を返す。
pub fn looks_like_function_start<S>(
    profile: &LanguageProfile,
    rest_of_line: &str,
    source: &mut S,
) -> bool
where
    S: InputSource + ?Sized,
{
    let mut frame = LookaheadFrame::new(profile);
    match frame.scan_line(rest_of_line) {
        Verdict::Function => return true,
        Verdict::NotFunction => return false,
        Verdict::Undecided => {}
    }

    let mut guard = match PositionGuard::capture(source) {
        Ok(guard) => guard,
        Err(err) => {
            log::warn!("lookahead unavailable: {err}");
            return false;
        }
    };

    let mut buf = String::new();
    loop {
        if frame.lines_scanned == MAX_LOOKAHEAD_LINES {
            return false;
        }
        frame.lines_scanned += 1;

        buf.clear();
        match guard.read_line(&mut buf) {
            Ok(0) => return frame.closed(),
            Ok(_) => {}
            Err(err) => {
                log::warn!("lookahead read failed: {err}");
                return false;
            }
        }

        match frame.scan_line(split_newline(&buf).0) {
            Verdict::Function => return true,
            Verdict::NotFunction => return false,
            Verdict::Undecided => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::source::LineSource;

    fn detect(lang: Language, rest: &str, following: &str) -> bool {
        let profile = lang.profile();
        let mut src = LineSource::from_bytes(following);
        looks_like_function_start(&profile, rest, &mut src)
    }

    #[test]
    fn test_call_with_body_on_next_line() {
        assert!(detect(Language::C, "(int x, int y)", "{\n"));
        assert!(detect(Language::C, "(int x, int y) {", ""));
    }

    #[test]
    fn test_declaration_and_expression_fail() {
        assert!(!detect(Language::C, ";", "{\n"));
        assert!(!detect(Language::C, " = 3;", ""));
        assert!(!detect(Language::C, "(void);", ""));
        assert!(!detect(Language::C, ", b;", ""));
        assert!(!detect(Language::C, "", "(x)\n{\n"));
    }

    #[test]
    fn test_division_rejects_candidate() {
        assert!(!detect(Language::C, "(a) / 2;", ""));
        assert!(!detect(Language::Verilog, "(a) / 2", "begin\n"));
        assert!(!detect(Language::C, "(a /", " 2)\n{\n"));
        assert!(detect(Language::C, "(a) // note", "{\n"));
    }

    #[test]
    fn test_parameters_across_lines() {
        assert!(detect(Language::C, "(int a,", "      int b)\n{\n"));
        assert!(!detect(Language::C, "(int a,", "      int b);\n"));
    }

    #[test]
    fn test_comments_are_skipped() {
        assert!(detect(Language::C, "(int a) /* ; */", "{\n"));
        assert!(detect(Language::C, "(int a /* ) ; */ )", "{\n"));
        assert!(detect(Language::C, "(int a, /* spans", "  more ) ; */ int b)\n{\n"));
        assert!(detect(Language::Trellis, "(x) ! ; trailing", "is\n"));
    }

    #[test]
    fn test_end_of_input() {
        assert!(detect(Language::C, "(a,", "b)"));
        assert!(!detect(Language::C, "(a,", "b"));
    }

    #[test]
    fn test_line_cap() {
        let mut following = String::from("\n").repeat(MAX_LOOKAHEAD_LINES - 1);
        following.push_str(")\n{\n");
        assert!(detect(Language::C, "(", &following));

        let mut too_far = String::from("\n").repeat(MAX_LOOKAHEAD_LINES);
        too_far.push_str(")\n{\n");
        assert!(!detect(Language::C, "(", &too_far));
    }

    #[test]
    fn test_position_restored_after_lookahead() {
        let profile = Language::C.profile();
        let mut src = LineSource::from_bytes("int b)\n{\nbody\n");
        let before = src.position().unwrap();
        assert!(looks_like_function_start(&profile, "(int a,", &mut src));
        assert_eq!(src.position().unwrap(), before);
        let mut buf = String::new();
        src.read_line(&mut buf).unwrap();
        assert_eq!(buf, "int b)\n");
    }
}
