// src/app.rs
//! 入力を順に注釈して 1 つの PostScript 文書を書き出す

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use c2ps_engine::{Document, EngineError, InputSource, LineSource};
use c2ps_shared_kernel::{
    C2psError, ErrorContext, InputError, InputResult, OutputError, PageCount, Result,
};
use chrono::Local;

use crate::config::{AppConfig, OutputTarget, STDIO_PATH};
use crate::header::{PageHeader, display_name, modified_time};
use crate::postscript::PostScriptRenderer;

/// 1 回の実行結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// 文書全体のページ数
    pub pages: PageCount,
    /// 最後まで処理できた入力の数
    pub processed: usize,
    /// 開けなかった、または途中で読めなくなった入力の数
    pub failures: usize,
}

impl RunOutcome {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failures == 0
    }
}

/// 設定どおりに文書を書き出す
///
/// # Errors
/// 出力先を作れない場合や書き込みに失敗した場合。入力ごとの失敗は
/// [`RunOutcome::failures`] に数えて処理を続ける。
pub fn run(config: &AppConfig) -> Result<RunOutcome> {
    let out: Box<dyn Write> = match &config.output {
        OutputTarget::Stdout => Box::new(io::stdout().lock()),
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|source| OutputError::Create {
                path: path.clone(),
                source,
            })?;
            Box::new(file)
        }
    };
    let (_, outcome) = write_document(config, BufWriter::new(out))?;
    log::debug!(
        "wrote {} page(s) to {}",
        outcome.pages,
        config.output.title()
    );
    Ok(outcome)
}

/// `out` に文書を書き出し、書き終えた `out` を返す
///
/// # Errors
/// 書き込みに失敗した場合
pub fn write_document<W: Write>(config: &AppConfig, out: W) -> Result<(W, RunOutcome)> {
    let renderer = PostScriptRenderer::new(out, config.postscript.clone(), Local::now().naive_local())
        .context("failed to write PostScript prolog")?;
    let mut document = Document::new(renderer, config.document.clone());
    let mut outcome = RunOutcome::default();

    for input in &config.inputs {
        let mut opened = match open_input(input) {
            Ok(opened) => opened,
            Err(err) => {
                report_skipped(&err.into());
                outcome.failures += 1;
                continue;
            }
        };
        document.renderer_mut().set_header(opened.header);

        let language = config.language_for(input);
        log::debug!("annotating {} as {language}", input.display());
        match document.annotate(opened.source.as_mut(), &language.profile()) {
            Ok(summary) => {
                outcome.processed += 1;
                log::debug!(
                    "{}: {} line(s), {} page(s), {} function(s)",
                    input.display(),
                    summary.lines,
                    summary.pages,
                    summary.functions.len()
                );
            }
            Err(EngineError::Read(source)) => {
                report_skipped(
                    &InputError::Read {
                        path: input.clone(),
                        source,
                    }
                    .into(),
                );
                outcome.failures += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to render '{}'", input.display()));
            }
        }
    }

    let (renderer, pages) = document.finish()?;
    outcome.pages = pages;
    let mut out = renderer.into_inner();
    out.flush()?;
    Ok((out, outcome))
}

struct OpenedInput {
    source: Box<dyn InputSource>,
    header: PageHeader,
}

fn open_input(path: &Path) -> InputResult<OpenedInput> {
    if path.as_os_str() == STDIO_PATH {
        // 先読みで巻き戻すため標準入力は全部読み込んでおく
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|source| InputError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(OpenedInput {
            source: Box::new(LineSource::from_bytes(bytes)),
            header: PageHeader::new(STDIO_PATH, Local::now().naive_local()),
        });
    }

    let source = LineSource::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let metadata = fs::metadata(path).ok();
    Ok(OpenedInput {
        source: Box::new(source),
        header: PageHeader::new(display_name(path), modified_time(metadata.as_ref())),
    })
}

fn report_skipped(err: &C2psError) {
    log::warn!("{err}");
    eprintln!("[warn] {err}; skipping");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use clap::Parser;

    fn config(argv: &[&str]) -> AppConfig {
        AppConfig::from_args(Args::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn test_write_document_for_c_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hello.c");
        fs::write(&input, "int\nmain(void)\n{\n    return 0; /* done */\n}\n").unwrap();

        let cfg = config(&["c2ps", "--page-group", "2", input.to_str().unwrap()]);
        let (out, outcome) = write_document(&cfg, Vec::new()).unwrap();
        let ps = String::from_utf8(out).unwrap();

        assert_eq!(outcome.processed, 1);
        assert_eq!(outcome.failures, 0);
        assert_eq!(outcome.pages, 2);
        assert!(ps.contains("%%Page: 1 1\n"));
        assert!(ps.contains("(main)rs\n"));
        assert!(ps.contains("(This Page Intentionally Blank)cs"));
        assert!(ps.ends_with("%%Trailer\n%%Pages: 2\n"));
    }

    #[test]
    fn test_missing_input_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("notes.txt");
        fs::write(&good, "hello\n").unwrap();
        let missing = dir.path().join("missing.c");

        let cfg = config(&["c2ps", missing.to_str().unwrap(), good.to_str().unwrap()]);
        let (_, outcome) = write_document(&cfg, Vec::new()).unwrap();

        assert_eq!(outcome.processed, 1);
        assert_eq!(outcome.failures, 1);
        assert_eq!(outcome.pages, 1);
        assert!(!outcome.is_complete());
    }
}
