//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use availability_checker_common::{error::CheckerError, protocol::ErrorResponse};
use axum::{http::StatusCode, response::IntoResponse, Json};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub CheckerError);

impl From<CheckerError> for AppError {
    fn from(err: CheckerError) -> Self {
        AppError(err)
    }
}

impl AppError {
    /// エラーに対応するHTTPステータス
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            CheckerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CheckerError::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}
