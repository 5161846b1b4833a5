// crates/engine/src/layout.rs
//! # Pagination & Layout Controller
//!
//! 縦位置と桁位置を管理し、改ページ・行番号・関数名注釈・折り返し・
//! 空白ページの補充を [`Renderer`] へのイベントとして出す。

use std::io;

use c2ps_shared_kernel::{LineCount, PageCount};

use crate::config::LayoutGeometry;
use crate::lexer::{ClassifiedRun, LexClass};
use crate::render::{PageKind, Renderer, Style};

/// 行番号を振る間隔
pub const LINE_NUMBER_INTERVAL: usize = 5;

/// 継続注釈の接頭辞
pub const CONTINUATION_PREFIX: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoPageYet,
    OnPage,
}

/// レイアウトの可変状態
#[derive(Debug, Clone)]
pub struct PageCursor {
    pub phase: Phase,
    pub y: i32,
    pub column: usize,
    /// 現在の入力でのページ番号
    pub page: PageCount,
    /// 文書全体での通し番号
    pub ordinal: PageCount,
    pub top_of_page: bool,
}

impl PageCursor {
    #[must_use]
    pub const fn new(top: i32, ordinal: PageCount) -> Self {
        Self {
            phase: Phase::NoPageYet,
            y: top,
            column: 0,
            page: PageCount::ZERO,
            ordinal,
            top_of_page: false,
        }
    }
}

/// 1 入力分のページ割り付け
#[derive(Debug)]
pub struct Paginator<'g> {
    geometry: &'g LayoutGeometry,
    cursor: PageCursor,
    style: Option<Style>,
    text: String,
}

impl<'g> Paginator<'g> {
    /// `ordinal` はこれまでに文書へ出したページ数
    #[must_use]
    pub const fn new(geometry: &'g LayoutGeometry, ordinal: PageCount) -> Self {
        Self {
            geometry,
            cursor: PageCursor::new(geometry.top(), ordinal),
            style: None,
            text: String::new(),
        }
    }

    #[must_use]
    pub const fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// 空でない行を出す前に呼ぶ。必要ならページを開き、行頭へ移動する。
    ///
    /// # Errors
    /// 描画先への書き込みに失敗した場合
    pub fn begin_line<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        continuation: Option<&str>,
    ) -> io::Result<()> {
        self.ensure_room(renderer, continuation)?;
        self.cursor.column = 0;
        renderer.move_to(LayoutGeometry::LEFT_MARGIN, self.cursor.y)
    }

    /// run を現在行に出す (タブは桁位置に合わせて空白へ展開する)
    ///
    /// # Errors
    /// 描画先への書き込みに失敗した場合
    pub fn emit_run<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        run: &ClassifiedRun,
    ) -> io::Result<()> {
        let style = run.class.body_style();
        let wrap = run.class == LexClass::PlainText;
        for ch in run.text.chars() {
            if wrap && self.cursor.column >= self.geometry.wrap_col() {
                self.wrap_line(renderer, style)?;
            }
            if ch == '\t' {
                let spaces = LayoutGeometry::TAB_WIDTH - self.cursor.column % LayoutGeometry::TAB_WIDTH;
                self.text.extend(std::iter::repeat_n(' ', spaces));
                self.cursor.column += spaces;
            } else {
                self.text.push(ch);
                self.cursor.column += 1;
            }
        }
        self.flush_text(renderer, style)
    }

    /// 行の右端に関数名を出す
    ///
    /// # Errors
    /// 描画先への書き込みに失敗した場合
    pub fn annotate_function<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        name: &str,
    ) -> io::Result<()> {
        renderer.move_to(self.geometry.right_margin(), self.cursor.y)?;
        self.set_style(renderer, Style::FunctionName)?;
        renderer.emit_text(name)
    }

    /// 行末: 行番号を出し、縦位置を 1 行進める
    ///
    /// # Errors
    /// 描画先への書き込みに失敗した場合
    pub fn end_line<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        line: LineCount,
        form_feed: bool,
    ) -> io::Result<()> {
        let numbered = line.value() % LINE_NUMBER_INTERVAL == 0 || self.cursor.top_of_page;
        if numbered && self.cursor.phase == Phase::OnPage && self.cursor.y > LayoutGeometry::BOTTOM {
            renderer.move_to(LayoutGeometry::LEFT_MARGIN - 8, self.cursor.y)?;
            self.set_style(renderer, Style::LineNumber)?;
            renderer.emit_text(&line.to_string())?;
        }
        self.cursor.top_of_page = false;
        self.cursor.y -= LayoutGeometry::LINE_HEIGHT;
        if form_feed {
            self.cursor.y = 0;
        }
        Ok(())
    }

    /// 入力の終わり: 最後のページを閉じ、`page_group` の倍数まで空白ページを足す
    ///
    /// # Errors
    /// 描画先への書き込みに失敗した場合
    pub fn finish<R: Renderer + ?Sized>(
        mut self,
        renderer: &mut R,
        page_group: usize,
    ) -> io::Result<PageCursor> {
        if self.cursor.phase == Phase::NoPageYet {
            return Ok(self.cursor);
        }
        renderer.end_page(PageKind::Content)?;
        for _ in 0..self.cursor.page.padding_to(page_group) {
            self.cursor.page.increment();
            self.cursor.ordinal.increment();
            renderer.begin_page(self.cursor.page, self.cursor.ordinal)?;
            renderer.end_page(PageKind::Blank)?;
        }
        Ok(self.cursor)
    }

    fn ensure_room<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        continuation: Option<&str>,
    ) -> io::Result<()> {
        match self.cursor.phase {
            Phase::NoPageYet => self.open_page(renderer, continuation),
            Phase::OnPage if self.cursor.y < LayoutGeometry::BOTTOM => {
                renderer.end_page(PageKind::Content)?;
                self.open_page(renderer, continuation)
            }
            Phase::OnPage => Ok(()),
        }
    }

    fn open_page<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        continuation: Option<&str>,
    ) -> io::Result<()> {
        self.cursor.phase = Phase::OnPage;
        self.cursor.page.increment();
        self.cursor.ordinal.increment();
        self.cursor.top_of_page = true;
        self.cursor.y = self.geometry.top();
        self.style = None;
        renderer.begin_page(self.cursor.page, self.cursor.ordinal)?;

        if let Some(name) = continuation {
            renderer.move_to(self.geometry.right_margin(), self.geometry.top())?;
            self.set_style(renderer, Style::FunctionName)?;
            renderer.emit_text(&format!("{CONTINUATION_PREFIX}{name}"))?;
        }
        Ok(())
    }

    /// 折り返し: `\` を付けて次の行 (必要なら次のページ) の行頭へ移る
    fn wrap_line<R: Renderer + ?Sized>(&mut self, renderer: &mut R, style: Style) -> io::Result<()> {
        self.text.push('\\');
        self.flush_text(renderer, style)?;
        self.cursor.y -= LayoutGeometry::LINE_HEIGHT;
        self.ensure_room(renderer, None)?;
        self.cursor.column = 0;
        renderer.move_to(LayoutGeometry::LEFT_MARGIN, self.cursor.y)
    }

    fn flush_text<R: Renderer + ?Sized>(&mut self, renderer: &mut R, style: Style) -> io::Result<()> {
        if self.text.is_empty() {
            return Ok(());
        }
        self.set_style(renderer, style)?;
        renderer.emit_text(&self.text)?;
        self.text.clear();
        Ok(())
    }

    fn set_style<R: Renderer + ?Sized>(&mut self, renderer: &mut R, style: Style) -> io::Result<()> {
        if self.style == Some(style) {
            return Ok(());
        }
        self.style = Some(style);
        renderer.set_style(style)
    }
}
