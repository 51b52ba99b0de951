//! ロギング初期化
//!
//! `CHECKER_LOG_LEVEL` → `RUST_LOG` → `info` の順でフィルタを決定し、
//! 標準エラーへ構造化ログを出力する。

use crate::config::get_env;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// グローバルsubscriberを設定する
///
/// 2回目以降の呼び出しはエラーを返す。
pub fn init() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

fn resolve_filter() -> EnvFilter {
    if let Some(level) = get_env("CHECKER_LOG_LEVEL") {
        match EnvFilter::try_new(&level) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Invalid CHECKER_LOG_LEVEL '{}': {}", level, e),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
