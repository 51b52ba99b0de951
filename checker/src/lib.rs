//! Availability Checker Server
//!
//! URLの一括稼働チェックを行うHTTPサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 同時実行数制限付きプローバー
pub mod prober;

/// axumサーバー起動・シャットダウン
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// プローバー（チケットプールを共有）
    pub prober: prober::Prober,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// プローバーからアプリケーション状態を作成
    pub fn new(prober: prober::Prober) -> Self {
        Self {
            prober,
            shutdown: shutdown::ShutdownController::default(),
        }
    }
}
