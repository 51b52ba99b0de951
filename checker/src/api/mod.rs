//! REST APIハンドラー
//!
//! URL一括稼働チェック（`POST /`）

/// URL一括稼働チェック
pub mod check;
/// APIエラーレスポンス
pub mod error;

use crate::AppState;
use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(check::check_urls))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
