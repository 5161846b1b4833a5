// crates/engine/src/render.rs
//! 描画先の抽象化
//!
//! エンジンは `set_style` を対象テキストより先に呼び、`end_page` から次の
//! `begin_page` までの間にテキストを出さない。

use std::io;

use c2ps_shared_kernel::PageCount;

/// 描画スタイル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Normal,
    Keyword,
    Literal,
    Comment,
    FunctionName,
    LineNumber,
    PlainText,
}

/// ページの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Content,
    /// ページグループを揃えるための空白ページ
    Blank,
}

pub trait Renderer {
    /// # Errors
    /// 出力先への書き込みに失敗した場合 (以下同様)
    fn begin_page(&mut self, page: PageCount, ordinal: PageCount) -> io::Result<()>;

    /// # Errors
    fn set_style(&mut self, style: Style) -> io::Result<()>;

    /// # Errors
    fn emit_text(&mut self, text: &str) -> io::Result<()>;

    /// # Errors
    fn move_to(&mut self, x: i32, y: i32) -> io::Result<()>;

    /// # Errors
    fn end_page(&mut self, kind: PageKind) -> io::Result<()>;

    /// # Errors
    fn emit_trailer(&mut self, total_pages: PageCount) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn begin_page(&mut self, page: PageCount, ordinal: PageCount) -> io::Result<()> {
        (**self).begin_page(page, ordinal)
    }

    fn set_style(&mut self, style: Style) -> io::Result<()> {
        (**self).set_style(style)
    }

    fn emit_text(&mut self, text: &str) -> io::Result<()> {
        (**self).emit_text(text)
    }

    fn move_to(&mut self, x: i32, y: i32) -> io::Result<()> {
        (**self).move_to(x, y)
    }

    fn end_page(&mut self, kind: PageKind) -> io::Result<()> {
        (**self).end_page(kind)
    }

    fn emit_trailer(&mut self, total_pages: PageCount) -> io::Result<()> {
        (**self).emit_trailer(total_pages)
    }
}

/// 記録された描画イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    BeginPage { page: PageCount, ordinal: PageCount },
    SetStyle(Style),
    Text(String),
    MoveTo { x: i32, y: i32 },
    EndPage(PageKind),
    Trailer(PageCount),
}

/// イベントを記録するだけの描画先 (テスト用)
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<RenderEvent> {
        self.events
    }

    /// 出力されたテキストを連結したもの
    #[must_use]
    pub fn text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// `kind` のページとして閉じられた数
    #[must_use]
    pub fn pages(&self, kind: PageKind) -> usize {
        self.events
            .iter()
            .filter(|e| **e == RenderEvent::EndPage(kind))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn begin_page(&mut self, page: PageCount, ordinal: PageCount) -> io::Result<()> {
        self.events.push(RenderEvent::BeginPage { page, ordinal });
        Ok(())
    }

    fn set_style(&mut self, style: Style) -> io::Result<()> {
        self.events.push(RenderEvent::SetStyle(style));
        Ok(())
    }

    fn emit_text(&mut self, text: &str) -> io::Result<()> {
        self.events.push(RenderEvent::Text(text.to_string()));
        Ok(())
    }

    fn move_to(&mut self, x: i32, y: i32) -> io::Result<()> {
        self.events.push(RenderEvent::MoveTo { x, y });
        Ok(())
    }

    fn end_page(&mut self, kind: PageKind) -> io::Result<()> {
        self.events.push(RenderEvent::EndPage(kind));
        Ok(())
    }

    fn emit_trailer(&mut self, total_pages: PageCount) -> io::Result<()> {
        self.events.push(RenderEvent::Trailer(total_pages));
        Ok(())
    }
}
