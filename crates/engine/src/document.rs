// crates/engine/src/document.rs
//! 入力を 1 つずつ注釈し、1 つの文書として描画先へ流す

use c2ps_shared_kernel::{LineCount, PageCount};

use crate::config::DocumentOptions;
use crate::error::{EngineError, Result};
use crate::language::LanguageProfile;
use crate::layout::Paginator;
use crate::lexer::{ClassifiedRun, Lexer};
use crate::lookahead::looks_like_function_start;
use crate::render::Renderer;
use crate::source::{InputSource, split_newline};

/// 1 入力の処理結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSummary {
    pub lines: LineCount,
    /// 空白ページを含むページ数
    pub pages: PageCount,
    /// 見つかった関数名 (出現順)
    pub functions: Vec<String>,
}

/// 複数の入力を通しページ番号で 1 文書にまとめる
#[derive(Debug)]
pub struct Document<R: Renderer> {
    renderer: R,
    options: DocumentOptions,
    pages: PageCount,
}

impl<R: Renderer> Document<R> {
    pub const fn new(renderer: R, options: DocumentOptions) -> Self {
        Self {
            renderer,
            options,
            pages: PageCount::ZERO,
        }
    }

    /// これまでに出したページ数
    #[must_use]
    pub const fn page_count(&self) -> PageCount {
        self.pages
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// 1 つの入力を最後まで注釈する
    ///
    /// 読み出しに失敗した場合も、それまでに開いたページは閉じてから
    /// エラーを返す。
    ///
    /// # Errors
    /// 入力の読み出し、または描画先への書き込みに失敗した場合
    pub fn annotate<S>(&mut self, source: &mut S, profile: &LanguageProfile) -> Result<FileSummary>
    where
        S: InputSource + ?Sized,
    {
        let geometry = self.options.geometry;
        let lexer = Lexer::new(profile);
        let mut state = lexer.initial_state();
        let mut paginator = Paginator::new(&geometry, self.pages);
        let mut summary = FileSummary::default();
        let mut buf = String::new();
        let mut runs: Vec<ClassifiedRun> = Vec::new();
        let mut read_error = None;

        loop {
            buf.clear();
            match source.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    read_error = Some(err);
                    break;
                }
            }
            let (content, newline) = split_newline(&buf);

            if !content.is_empty() {
                paginator
                    .begin_line(&mut self.renderer, state.continuation())
                    .map_err(EngineError::Render)?;
            }

            runs.clear();
            lexer.scan_line(&mut state, content, newline, &mut runs, |rest| {
                looks_like_function_start(profile, rest, &mut *source)
            });
            for run in &runs {
                paginator
                    .emit_run(&mut self.renderer, run)
                    .map_err(EngineError::Render)?;
            }

            let events = state.take_line_events();
            if let Some(name) = events.function {
                paginator
                    .annotate_function(&mut self.renderer, &name)
                    .map_err(EngineError::Render)?;
                summary.functions.push(name);
            }
            paginator
                .end_line(&mut self.renderer, state.line(), events.form_feed)
                .map_err(EngineError::Render)?;
            summary.lines = state.line();
            state.next_line();
        }

        let cursor = paginator
            .finish(&mut self.renderer, self.options.page_group)
            .map_err(EngineError::Render)?;
        summary.pages = cursor.page;
        self.pages = cursor.ordinal;

        match read_error {
            Some(err) => Err(EngineError::Read(err)),
            None => Ok(summary),
        }
    }

    /// 文書を閉じ (トレーラを出し)、描画先と総ページ数を返す
    ///
    /// # Errors
    /// 描画先への書き込みに失敗した場合
    pub fn finish(mut self) -> Result<(R, PageCount)> {
        self.renderer
            .emit_trailer(self.pages)
            .map_err(EngineError::Render)?;
        Ok((self.renderer, self.pages))
    }
}
