// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use c2ps::app::{self, RunOutcome};
use c2ps::args::Args;
use c2ps::config::AppConfig;
use c2ps::logging;
use c2ps::parsers::{DEFAULTS_ENV, prepend_defaults};

/// 一部の入力を処理できなかったときの終了コード
const EXIT_PARTIAL: u8 = 2;

fn run(args: Args) -> Result<RunOutcome> {
    let config = AppConfig::from_args(args).context("invalid configuration")?;
    let outcome = app::run(&config).context("failed to write PostScript output")?;
    Ok(outcome)
}

fn main() -> ExitCode {
    let defaults = std::env::var(DEFAULTS_ENV).ok();
    let args = Args::parse_from(prepend_defaults(std::env::args_os(), defaults.as_deref()));
    logging::init(args.output.verbose);

    match run(args) {
        Ok(outcome) if outcome.is_complete() => ExitCode::SUCCESS,
        Ok(outcome) => {
            eprintln!(
                "c2ps: {} input(s) skipped, {} processed",
                outcome.failures, outcome.processed
            );
            ExitCode::from(EXIT_PARTIAL)
        }
        Err(err) => {
            eprintln!("c2ps: {err:#}");
            ExitCode::FAILURE
        }
    }
}
