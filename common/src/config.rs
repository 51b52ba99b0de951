//! 設定管理
//!
//! ServerConfig, ProbeConfig等の設定構造体

use crate::error::CommonError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 1リクエストで受け付けるURL数の上限
pub const MAX_BATCH_SIZE: usize = 100;

/// プロセス全体で同時に実行できるプローブ数の上限
pub const GLOBAL_CONCURRENCY_LIMIT: usize = 100;

/// 1プローブあたりのタイムアウト（接続・リクエスト・レスポンス全体）
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// プローブ時に送信するUser-Agent
pub const USER_AGENT: &str = "AvailabilityChecker/1.0";

/// リダイレクト追従の最大回数
pub const MAX_REDIRECTS: usize = 20;

/// サーバー設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8000)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl ServerConfig {
    /// バインドアドレス（host:port）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// プローブ設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeConfig {
    /// バッチサイズ上限 (デフォルト: 100)
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// 同時実行プローブ数の上限 (デフォルト: 100)
    #[serde(default = "default_concurrency_limit")]
    pub concurrency_limit: usize,

    /// プローブタイムアウト（ミリ秒）(デフォルト: 5000)
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// User-Agent (デフォルト: "AvailabilityChecker/1.0")
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// リダイレクト追従の最大回数 (デフォルト: 20)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

fn default_max_batch_size() -> usize {
    MAX_BATCH_SIZE
}

fn default_concurrency_limit() -> usize {
    GLOBAL_CONCURRENCY_LIMIT
}

fn default_probe_timeout_ms() -> u64 {
    PROBE_TIMEOUT.as_millis() as u64
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

fn default_max_redirects() -> usize {
    MAX_REDIRECTS
}

impl ProbeConfig {
    /// プローブタイムアウト
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// 値の妥当性を検証
    ///
    /// 上限0はすべてのリクエストを拒否、または永久に待機させるため不正とする。
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.max_batch_size == 0 {
            return Err(CommonError::Config(
                "max_batch_size must be at least 1".to_string(),
            ));
        }
        if self.concurrency_limit == 0 {
            return Err(CommonError::Config(
                "concurrency_limit must be at least 1".to_string(),
            ));
        }
        if self.probe_timeout_ms == 0 {
            return Err(CommonError::Config(
                "probe_timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
            concurrency_limit: default_concurrency_limit(),
            probe_timeout_ms: default_probe_timeout_ms(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
        }
    }
}
