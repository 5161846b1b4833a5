// src/count.rs
//! # Listing Estimator
//!
//! 入力を印刷したときの行数・ページ数・最大桁を見積もる (`count` コマンド)。
//! 行の分割は c2ps 本体と同じ規則 (改ページ文字でページを替え、タブは 8 桁単位)
//! だが、ページ送りは固定の行数で近似する。

use std::io::{self, Read};

use c2ps_shared_kernel::{ColumnCount, LineCount, OutputError, OutputResult, PageCount};
use serde::Serialize;

pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_NUP: usize = 2;
pub const TOTAL_LABEL: &str = "TOTAL-->";

const TAB_WIDTH: usize = 8;
const FORM_FEED: u8 = 0x0c;

/// 1 入力 (または合計) の見積もり
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub name: String,
    pub pages: PageCount,
    pub lines: LineCount,
    pub max_col: ColumnCount,
}

impl Tally {
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pages: PageCount::ZERO,
            lines: LineCount::ZERO,
            max_col: ColumnCount::ZERO,
        }
    }
}

/// バイト列を順に数える
#[derive(Debug, Clone)]
pub struct Counter {
    rows: usize,
    lines: LineCount,
    pages: PageCount,
    row: usize,
    col: usize,
    max_col: usize,
}

impl Counter {
    #[must_use]
    pub const fn new(rows: usize) -> Self {
        Self {
            rows,
            lines: LineCount::ZERO,
            pages: PageCount::ZERO,
            row: 0,
            col: 0,
            max_col: 0,
        }
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        for &b in bytes {
            match b {
                FORM_FEED => {
                    self.lines.increment();
                    self.pages.increment();
                    self.row = 0;
                    self.col = 0;
                }
                b'\n' => {
                    self.lines.increment();
                    // 比較は加算前の行位置で行う
                    let row = self.row;
                    self.row += 1;
                    if row > self.rows {
                        self.pages.increment();
                        self.row = 0;
                    }
                    self.col = 0;
                }
                b'\t' => self.col = (self.col / TAB_WIDTH + 1) * TAB_WIDTH,
                _ => self.col += 1,
            }
            self.max_col = self.max_col.max(self.col);
        }
    }

    /// 途中の行やページを 1 つと数えて締める
    #[must_use]
    pub fn finish(mut self, name: impl Into<String>) -> Tally {
        if self.row > 0 || self.col > 0 {
            self.lines.increment();
            self.pages.increment();
        }
        Tally {
            name: name.into(),
            pages: self.pages,
            lines: self.lines,
            max_col: ColumnCount::new(self.max_col),
        }
    }
}

/// # Errors
/// 読み出しに失敗した場合
pub fn tally_reader<R: Read>(name: impl Into<String>, mut reader: R, rows: usize) -> io::Result<Tally> {
    let mut counter = Counter::new(rows);
    let mut buf = [0u8; 8192];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => counter.feed(&buf[..n]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(counter.finish(name))
}

#[must_use]
pub fn tally_bytes(name: impl Into<String>, bytes: &[u8], rows: usize) -> Tally {
    let mut counter = Counter::new(rows);
    counter.feed(bytes);
    counter.finish(name)
}

/// 合計行
///
/// `nup` が 2 のときは奇数ページの入力ごとに 1 ページ足す。
#[must_use]
pub fn total(tallies: &[Tally], nup: usize) -> Tally {
    tallies.iter().fold(Tally::empty(TOTAL_LABEL), |mut acc, t| {
        acc.max_col = acc.max_col.max(t.max_col);
        acc.lines += t.lines;
        acc.pages += t.pages;
        if nup == 2 && t.pages.value() % 2 == 1 {
            acc.pages.increment();
        }
        acc
    })
}

/// 表示用の見積もり一式 (合計は 2 入力以上のときだけ)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub nup: usize,
    pub rows: usize,
    pub files: Vec<Tally>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Tally>,
}

impl Report {
    #[must_use]
    pub fn new(files: Vec<Tally>, nup: usize, rows: usize) -> Self {
        let total_row = (files.len() > 1).then(|| total(&files, nup));
        Self {
            nup,
            rows,
            files,
            total: total_row,
        }
    }

    fn rows_with_total(&self) -> impl Iterator<Item = &Tally> {
        self.files.iter().chain(self.total.as_ref())
    }

    /// 名前を右寄せした表
    #[must_use]
    pub fn render_table(&self) -> String {
        let width = self
            .rows_with_total()
            .map(|t| t.name.len())
            .chain(std::iter::once(TOTAL_LABEL.len()))
            .max()
            .unwrap_or(0)
            + 2;
        let plural = |n: usize| if n > 1 { "s " } else { "  " };

        let mut out = String::new();
        for t in self.rows_with_total() {
            let (pages, lines) = (t.pages.value(), t.lines.value());
            out.push_str(&format!(
                "{:>width$}{pages:>5} page{}{lines:>6} line{}{:>6} max col\n",
                t.name,
                plural(pages),
                plural(lines),
                t.max_col.value(),
            ));
        }
        out
    }

    /// # Errors
    /// シリアライズに失敗した場合
    pub fn render_json(&self) -> OutputResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| OutputError::Serialization {
            format: "json".to_string(),
            details: e.to_string(),
        })
    }
}
