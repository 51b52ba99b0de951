//! 通信プロトコル定義
//!
//! `POST /` のリクエスト/レスポンスボディ

use serde::{Deserialize, Serialize};

use crate::types::ProbeResultSet;

/// URL一括チェックリクエスト
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckUrlsRequest {
    /// チェック対象URL（順序付き、重複可）
    pub urls: Vec<String>,
}

/// URL一括チェックレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckUrlsResponse {
    /// URL → "available" | "unavailable"
    pub results: ProbeResultSet,
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// 人間が読めるエラーメッセージ
    pub detail: String,
}

impl ErrorResponse {
    /// メッセージからエラーレスポンスを作成
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
