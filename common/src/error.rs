//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! - `CommonError`: 設定の検証エラー（起動時に致命的）
//! - `CheckerError`: 呼び出し元へ返すエラー（HTTPレスポンスへ変換される）
//! - `ProbeFailure`: 単一URLのプローブ失敗。外部へは出さず`unavailable`に畳み込む

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Availability checker error type
///
/// リクエスト起因のエラーのみを表す。起動時の失敗は`anyhow`で`main`へ返す。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckerError {
    /// Batch is empty or exceeds the size ceiling
    #[error("{0}")]
    InvalidRequest(String),

    /// Request body could not be parsed
    #[error("{0}")]
    MalformedBody(String),
}

impl CheckerError {
    /// 空バッチのエラー
    pub fn no_urls() -> Self {
        Self::InvalidRequest("No URLs provided".to_string())
    }

    /// バッチ上限超過のエラー
    pub fn too_many_urls(max: usize) -> Self {
        Self::InvalidRequest(format!("Maximum {} URLs allowed", max))
    }
}

/// 単一プローブの失敗理由（内部診断用）
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// URLとして解釈できない
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// タイムアウト
    #[error("timed out")]
    Timeout,

    /// 接続失敗（DNS解決失敗・接続拒否を含む）
    #[error("connect failed: {0}")]
    Connect(String),

    /// リダイレクトループ、上限超過
    #[error("redirect failed: {0}")]
    Redirect(String),

    /// その他のプロトコル/トランスポートエラー
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result alias for checker operations
pub type CheckerResult<T> = Result<T, CheckerError>;
