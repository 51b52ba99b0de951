//! URL一括稼働チェックAPIハンドラー

use crate::{api::error::AppError, AppState};
use availability_checker_common::{
    error::{CheckerError, CheckerResult},
    protocol::{CheckUrlsRequest, CheckUrlsResponse},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::time::Instant;
use tracing::{info, warn};

/// POST / - URL一括稼働チェック
///
/// バッチサイズを検証し、全URLのプローブ完了を待ってから結果を返す。
/// 検証に失敗した場合はプローブを一切行わない。
pub async fn check_urls(
    State(state): State<AppState>,
    payload: Result<Json<CheckUrlsRequest>, JsonRejection>,
) -> Result<Json<CheckUrlsResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected malformed request body");
        CheckerError::MalformedBody(rejection.body_text())
    })?;

    let max_batch_size = state.prober.config().max_batch_size;
    if let Err(e) = validate_batch(&req.urls, max_batch_size) {
        warn!(count = req.urls.len(), max = max_batch_size, error = %e, "Rejected URL batch");
        return Err(e.into());
    }

    let count = req.urls.len();
    let start = Instant::now();
    let results = state.prober.probe_all(req.urls).await;

    info!(
        count,
        distinct = results.len(),
        available = results.available_count(),
        unavailable = results.unavailable_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "URL batch checked"
    );

    Ok(Json(CheckUrlsResponse { results }))
}

/// バッチサイズを検証（1件以上、上限以下）
pub fn validate_batch(urls: &[String], max_batch_size: usize) -> CheckerResult<()> {
    if urls.is_empty() {
        return Err(CheckerError::no_urls());
    }
    if urls.len() > max_batch_size {
        return Err(CheckerError::too_many_urls(max_batch_size));
    }
    Ok(())
}
