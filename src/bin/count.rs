// src/bin/count.rs
//! c2ps で印刷したときの行数とページ数を見積もる
#![allow(clippy::multiple_crate_versions)]

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use c2ps::config::STDIO_PATH;
use c2ps::count::{DEFAULT_NUP, DEFAULT_ROWS, Report, Tally, tally_reader};
use c2ps::logging;
use c2ps::parsers;

#[derive(Parser, Debug)]
#[command(
    name = "count",
    version,
    about = "リストを印刷したときの行数・ページ数・最大桁を見積もる",
    args_override_self = true
)]
struct Args {
    /// 1 枚に並べるページ数 (1 または 2); 2 のとき合計を偶数ページに揃える
    #[arg(long, default_value_t = DEFAULT_NUP, value_parser = parsers::parse_nup)]
    nup: usize,

    /// 1 ページの行数
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = parsers::parse_positive_usize)]
    rows: usize,

    /// JSON で出力
    #[arg(long)]
    json: bool,

    /// 詳細なログを出す
    #[arg(short, long)]
    verbose: bool,

    /// 入力ファイル (`-` は標準入力)
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn tally(path: &Path, rows: usize) -> io::Result<Tally> {
    let name = path.display().to_string();
    if path.as_os_str() == STDIO_PATH {
        tally_reader(name, io::stdin().lock(), rows)
    } else {
        tally_reader(name, File::open(path)?, rows)
    }
}

fn run(args: &Args) -> Result<()> {
    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        match tally(path, args.rows) {
            Ok(t) => {
                log::debug!("{}: {} line(s), {} page(s)", t.name, t.lines, t.pages);
                files.push(t);
            }
            Err(err) => {
                log::warn!("{}: {err}", path.display());
                eprintln!("count: Can't open {}, ignoring file", path.display());
            }
        }
    }

    let report = Report::new(files, args.nup, args.rows);
    let text = if args.json {
        let mut json = report.render_json()?;
        json.push('\n');
        json
    } else {
        report.render_table()
    };
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes()).context("failed to write report")?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("count: {err:#}");
            ExitCode::FAILURE
        }
    }
}
