//! Configuration management via environment variables
//!
//! Reads `CHECKER_*` variables on top of the defaults defined in
//! `availability_checker_common::config`. Unset variables fall back to the
//! default; unparsable values are logged and ignored.

use availability_checker_common::{
    config::{ProbeConfig, ServerConfig},
    error::CommonError,
};
use std::str::FromStr;

/// Get an environment variable, treating empty values as unset
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable or a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable parsed to a specific type
///
/// # Returns
/// The parsed value, or `default` if the variable is unset or parsing fails
pub fn get_env_parse<T: FromStr>(name: &str, default: T) -> T {
    match get_env(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    "Environment variable '{}' has invalid value '{}', using default",
                    name,
                    raw
                );
                default
            }
        },
        None => default,
    }
}

/// サーバー設定を環境変数から読み込む
///
/// `CHECKER_HOST`（デフォルト: 0.0.0.0）、`CHECKER_PORT`（デフォルト: 8000）
pub fn load_server_config() -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        host: get_env_or("CHECKER_HOST", &defaults.host),
        port: get_env_parse("CHECKER_PORT", defaults.port),
    }
}

/// プローブ設定を環境変数から読み込む
///
/// 読み込み後に妥当性を検証し、上限0などの設定はエラーにする。
pub fn load_probe_config() -> Result<ProbeConfig, CommonError> {
    let defaults = ProbeConfig::default();
    let config = ProbeConfig {
        max_batch_size: get_env_parse("CHECKER_MAX_BATCH_SIZE", defaults.max_batch_size),
        concurrency_limit: get_env_parse("CHECKER_CONCURRENCY_LIMIT", defaults.concurrency_limit),
        probe_timeout_ms: get_env_parse("CHECKER_PROBE_TIMEOUT_MS", defaults.probe_timeout_ms),
        user_agent: defaults.user_agent,
        max_redirects: defaults.max_redirects,
    };
    config.validate()?;
    Ok(config)
}
