// src/logging.rs
use tracing_subscriber::EnvFilter;

/// 標準エラーへ書くログを設定する
///
/// `--verbose` なら `debug`、そうでなければ `RUST_LOG` (未設定なら `warn`)。
/// `log` クレート経由の記録もここに流れる。
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // 二重初期化 (テストなど) は無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
