//! Integration Test: POST / による一括稼働チェック
//!
//! 実サーバーを起動し、HTTP経由でゲートウェイの挙動を検証する。

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::spawn_checker;

/// シナリオ: 200を返すURLと404を返すURLの混在
#[tokio::test]
async fn test_good_and_missing_urls() {
    let target = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&target)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&target)
        .await;

    let good = format!("{}/", target.uri());
    let bad = format!("{}/404", target.uri());

    let server = spawn_checker().await;
    let resp = Client::new()
        .post(server.url())
        .json(&json!({ "urls": [good.clone(), bad.clone()] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["results"][good.as_str()], "available");
    assert_eq!(body["results"][bad.as_str()], "unavailable");
    assert_eq!(body["results"].as_object().unwrap().len(), 2);

    server.shutdown().await;
}

/// シナリオ: 空リストは400
#[tokio::test]
async fn test_empty_list_is_rejected() {
    let server = spawn_checker().await;
    let resp = Client::new()
        .post(server.url())
        .json(&json!({ "urls": [] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "No URLs provided" }));

    server.shutdown().await;
}

/// シナリオ: 150件は400
#[tokio::test]
async fn test_150_urls_are_rejected() {
    let urls: Vec<String> = (0..150).map(|i| format!("https://example.com/{}", i)).collect();

    let server = spawn_checker().await;
    let resp = Client::new()
        .post(server.url())
        .json(&json!({ "urls": urls }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Maximum 100 URLs allowed" }));
    // 検証エラー時はチケットを一切使わない
    assert_eq!(server.state().prober.pool().peak_in_flight(), 0);

    server.shutdown().await;
}

/// シナリオ: タイムアウトを超える接続はunavailableだが全体は200
#[tokio::test]
async fn test_slow_target_is_unavailable_but_call_succeeds() {
    let target = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&target)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&target)
        .await;

    let slow = format!("{}/slow", target.uri());
    let fast = format!("{}/fast", target.uri());

    let server = spawn_checker().await;
    let resp = Client::new()
        .post(server.url())
        .json(&json!({ "urls": [slow.clone(), fast.clone(), "http://127.0.0.1:59999"] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["results"][slow.as_str()], "unavailable");
    assert_eq!(body["results"][fast.as_str()], "available");
    assert_eq!(body["results"]["http://127.0.0.1:59999"], "unavailable");

    server.shutdown().await;
}

/// リダイレクト追従後のステータスで判定される
#[tokio::test]
async fn test_redirect_chain_is_followed() {
    let target = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/redirect/2"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{}/redirect/1", target.uri())),
        )
        .mount(&target)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/redirect/1"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/final", target.uri())),
        )
        .mount(&target)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/final"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&target)
        .await;

    let url = format!("{}/redirect/2", target.uri());

    let server = spawn_checker().await;
    let body: Value = Client::new()
        .post(server.url())
        .json(&json!({ "urls": [url.clone()] }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["results"][url.as_str()], "available");

    server.shutdown().await;
}

/// 不正なJSONボディは422
#[tokio::test]
async fn test_malformed_body_is_unprocessable() {
    let server = spawn_checker().await;
    let resp = Client::new()
        .post(server.url())
        .header("content-type", "application/json")
        .body(r#"{"links": []}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 422);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].is_string());

    server.shutdown().await;
}
