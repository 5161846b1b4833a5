// src/postscript.rs
//! # PostScript Renderer
//!
//! エンジンの描画イベントを EPSF-2.0 の文書として書き出す。
//!
//! | Style          | Procedure | Font (fixed / proportional)        |
//! |----------------|-----------|------------------------------------|
//! | `Normal`       | `ordfn`   | Courier / Times-Roman              |
//! | `Keyword`      | `keyfn`   | Courier-Bold / Times-Bold          |
//! | `Comment`      | `comfn`   | Courier-Oblique / Times-Italic     |
//! | `Literal`      | `txtfn`   | Courier                            |
//! | `PlainText`    | `filfn`   | Courier (small)                    |
//! | `LineNumber`   | `linfn`   | Helvetica-Oblique (small)          |
//! | `FunctionName` | `prcfn`   | Helvetica-Oblique (big)            |

use std::io::{self, Write};

use c2ps_engine::{LayoutGeometry, PageKind, Renderer, Style};
use c2ps_shared_kernel::PageCount;
use chrono::NaiveDateTime;

use crate::header::{PageHeader, creation_date};

const NORMAL_FONT_SIZE: i32 = 10;
const SMALL_FONT_SIZE: i32 = 8;
const BIG_FONT_SIZE: i32 = 12;
const BLANK_PAGE_TEXT: &str = "This Page Intentionally Blank";

/// 本文のフォント系統
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    Fixed,
    #[default]
    Proportional,
}

/// 文書全体の体裁
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostScriptSettings {
    pub geometry: LayoutGeometry,
    pub font: FontFamily,
    pub rotate: bool,
    pub duplex: bool,
    pub bottom_text: Option<String>,
    pub title: String,
    pub creator: String,
}

#[must_use]
const fn procedure(style: Style) -> &'static str {
    match style {
        Style::Normal => "ordfn",
        Style::Keyword => "keyfn",
        Style::Literal => "txtfn",
        Style::Comment => "comfn",
        Style::FunctionName => "prcfn",
        Style::LineNumber => "linfn",
        Style::PlainText => "filfn",
    }
}

/// PostScript 文字列として書けるように `\`, `(`, `)` をエスケープする
///
/// Latin-1 の範囲外の文字は `?` に置き換える。
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            '\u{80}'..='\u{ff}' => out.push_str(&format!("\\{:03o}", u32::from(ch))),
            _ => out.push('?'),
        }
    }
    out
}

pub struct PostScriptRenderer<W: Write> {
    out: W,
    settings: PostScriptSettings,
    header: PageHeader,
    style: Style,
    page: PageCount,
}

impl<W: Write> PostScriptRenderer<W> {
    /// プロローグを書き出して描画先を作る
    ///
    /// # Errors
    /// 書き込みに失敗した場合
    pub fn new(out: W, settings: PostScriptSettings, created: NaiveDateTime) -> io::Result<Self> {
        let mut renderer = Self {
            out,
            settings,
            header: PageHeader::default(),
            style: Style::Normal,
            page: PageCount::ZERO,
        };
        renderer.write_prolog(created)?;
        Ok(renderer)
    }

    /// 以降のページに使う見出しを設定する
    pub fn set_header(&mut self, header: PageHeader) {
        self.header = header;
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_prolog(&mut self, created: NaiveDateTime) -> io::Result<()> {
        let g = self.settings.geometry;
        let out = &mut self.out;
        writeln!(out, "%!PS-Adobe-2.0 EPSF-2.0")?;
        writeln!(out, "%%BoundingBox: 0 0 {} {}", g.width(), g.height())?;
        match self.settings.font {
            FontFamily::Fixed => writeln!(
                out,
                "%%DocumentFonts: Courier Courier-Oblique Courier-Bold Helvetica-Oblique"
            )?,
            FontFamily::Proportional => writeln!(
                out,
                "%%DocumentFonts: Courier Times-Italic Times-Bold Times-Roman Helvetica-Oblique"
            )?,
        }
        writeln!(out, "%%Title: {}", self.settings.title)?;
        writeln!(out, "%%Creator: {}", self.settings.creator)?;
        writeln!(out, "%%CreationDate: {}", creation_date(created))?;
        writeln!(out, "%%Pages: (atend)")?;
        writeln!(out, "%%EndComments")?;

        writeln!(out, "/nf {{findfont exch scalefont setfont}} def")?;
        let (bold, roman, italic) = match self.settings.font {
            FontFamily::Fixed => ("Courier-Bold", "Courier", "Courier-Oblique"),
            FontFamily::Proportional => ("Times-Bold", "Times-Roman", "Times-Italic"),
        };
        writeln!(out, "/keyfn {{{NORMAL_FONT_SIZE} /{bold} nf}} def")?;
        writeln!(out, "/ordfn {{{NORMAL_FONT_SIZE} /{roman} nf}} def")?;
        writeln!(out, "/comfn {{{NORMAL_FONT_SIZE} /{italic} nf}} def")?;
        writeln!(out, "/txtfn {{{NORMAL_FONT_SIZE} /Courier nf}} def")?;
        writeln!(out, "/filfn {{{SMALL_FONT_SIZE} /Courier nf}} def")?;
        writeln!(out, "/linfn {{{SMALL_FONT_SIZE} /Helvetica-Oblique nf}} def")?;
        writeln!(out, "/botfn {{{BIG_FONT_SIZE} /Helvetica-Oblique nf}} def")?;
        writeln!(out, "/topfn {{{BIG_FONT_SIZE} /Helvetica-Oblique nf}} def")?;
        writeln!(out, "/prcfn {{{BIG_FONT_SIZE} /Helvetica-Oblique nf}} def")?;
        writeln!(out, "/pagfn {{{} /Helvetica-Oblique nf}} def", 2 * BIG_FONT_SIZE)?;
        writeln!(out, "/s /show load def")?;
        writeln!(out, "/rs {{dup stringwidth pop neg 0 rmoveto s}} def")?;
        writeln!(out, "/cs {{dup stringwidth pop neg 2 div 0 rmoveto s}} def")?;
        writeln!(out, "/m /moveto load def")?;
        writeln!(out, "/l {{newpath moveto lineto stroke}} def")?;
        writeln!(out, "ordfn")?;
        if self.settings.duplex {
            writeln!(out, "<< /Duplex true >> setpagedevice")?;
        }
        self.write_rotation()?;
        writeln!(self.out, "\n%%EndProlog")
    }

    fn write_rotation(&mut self) -> io::Result<()> {
        if self.settings.rotate {
            // 寸法は入れ替え済みなので height が用紙の幅
            writeln!(self.out, "{} 0 translate 90 rotate", self.settings.geometry.height())?;
        }
        Ok(())
    }

    /// 下部テキスト・区切り線・左罫線と `showpage`
    fn write_furniture(&mut self, kind: PageKind) -> io::Result<()> {
        let g = self.settings.geometry;
        let left = LayoutGeometry::LEFT_MARGIN;
        let bottom = LayoutGeometry::BOTTOM_LINE;
        let rmarg = g.right_margin();
        let topline = g.topline();

        if let Some(text) = &self.settings.bottom_text {
            writeln!(self.out, "botfn {rmarg} {bottom} m ({})rs", escape(text))?;
        }

        match kind {
            PageKind::Content => {
                let header_y = topline + LayoutGeometry::LINE_HEIGHT + 4;
                writeln!(
                    self.out,
                    "topfn {left} {header_y} m ({})s {rmarg} {topline} m ({})rs",
                    escape(&self.header.timestamp),
                    escape(&self.header.file_name)
                )?;
                writeln!(self.out, "pagfn {rmarg} {header_y} m ({})rs", self.page)?;
            }
            PageKind::Blank => {
                writeln!(
                    self.out,
                    "topfn {} {} m ({BLANK_PAGE_TEXT})cs",
                    left + (rmarg - left) / 2,
                    bottom + (topline - bottom) / 2
                )?;
            }
        }

        writeln!(
            self.out,
            "{} {} {} {} l",
            left - 4,
            topline - 4,
            rmarg + 4,
            topline - 4
        )?;
        writeln!(
            self.out,
            "{} {bottom} {} {} l",
            left - 4,
            left - 4,
            topline + 2 * BIG_FONT_SIZE + 4
        )?;
        writeln!(self.out, "showpage")?;
        self.write_rotation()
    }
}

impl<W: Write> Renderer for PostScriptRenderer<W> {
    fn begin_page(&mut self, page: PageCount, ordinal: PageCount) -> io::Result<()> {
        self.page = page;
        writeln!(self.out, "%%Page: {ordinal} {ordinal}")
    }

    fn set_style(&mut self, style: Style) -> io::Result<()> {
        self.style = style;
        write!(self.out, "{} ", procedure(style))
    }

    fn emit_text(&mut self, text: &str) -> io::Result<()> {
        let show = match self.style {
            Style::FunctionName | Style::LineNumber => "rs",
            _ => "s",
        };
        writeln!(self.out, "({}){show}", escape(text))
    }

    fn move_to(&mut self, x: i32, y: i32) -> io::Result<()> {
        write!(self.out, "{x} {y} m ")
    }

    fn end_page(&mut self, kind: PageKind) -> io::Result<()> {
        self.write_furniture(kind)
    }

    fn emit_trailer(&mut self, total_pages: PageCount) -> io::Result<()> {
        writeln!(self.out, "%%Trailer")?;
        writeln!(self.out, "%%Pages: {total_pages}")?;
        self.out.flush()
    }
}
