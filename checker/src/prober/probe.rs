//! 単一URLのプローブ
//!
//! HEADリクエストを送信し、リダイレクト追従後の最終ステータスで判定する。
//! 通信エラーはすべて`unavailable`に畳み込み、呼び出し元へは伝播しない。

use availability_checker_common::{config::ProbeConfig, error::ProbeFailure, types::Availability};
use reqwest::{redirect, Client, StatusCode};
use tracing::debug;

/// 1URLをプローブして判定結果を返す
pub async fn probe_one(config: &ProbeConfig, url: &str) -> Availability {
    match head_status(config, url).await {
        Ok(status) => {
            let availability = Availability::from_status(status.as_u16());
            debug!(url = %url, status = status.as_u16(), result = %availability, "Probe completed");
            availability
        }
        Err(failure) => {
            debug!(url = %url, error = %failure, "Probe failed");
            Availability::Unavailable
        }
    }
}

/// HEADリクエストの最終ステータスを取得
///
/// クライアントはプローブごとに生成し、終了とともに破棄する。
async fn head_status(config: &ProbeConfig, url: &str) -> Result<StatusCode, ProbeFailure> {
    let client = Client::builder()
        .timeout(config.probe_timeout())
        .user_agent(config.user_agent.as_str())
        .redirect(redirect::Policy::limited(config.max_redirects))
        .build()
        .map_err(classify)?;

    let response = client.head(url).send().await.map_err(classify)?;
    Ok(response.status())
}

/// reqwestのエラーを内部診断用の失敗理由へ分類
fn classify(err: reqwest::Error) -> ProbeFailure {
    if err.is_timeout() {
        ProbeFailure::Timeout
    } else if err.is_builder() {
        ProbeFailure::InvalidUrl(err.to_string())
    } else if err.is_redirect() {
        ProbeFailure::Redirect(err.to_string())
    } else if err.is_connect() {
        ProbeFailure::Connect(err.to_string())
    } else {
        ProbeFailure::Transport(err.to_string())
    }
}
