//! Integration Test: プロセス全体の同時実行数制限
//!
//! 複数の同時リクエストが同じチケットプールを共有することを検証する。

use availability_checker_common::config::ProbeConfig;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::{spawn_checker_with, test_probe_config};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_limit_is_shared_across_concurrent_requests() {
    let target = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(100)))
        .mount(&target)
        .await;

    let server = spawn_checker_with(ProbeConfig {
        concurrency_limit: 5,
        ..test_probe_config()
    })
    .await;

    let client = Client::new();
    let requests = (0..3).map(|batch| {
        let urls: Vec<String> = (0..20)
            .map(|i| format!("{}/batch/{}/{}", target.uri(), batch, i))
            .collect();
        let client = client.clone();
        let url = server.url();
        async move {
            let resp = client
                .post(url)
                .json(&json!({ "urls": urls }))
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status().as_u16(), 200);
            resp.json::<Value>().await.unwrap()
        }
    });

    let bodies = futures::future::join_all(requests).await;

    for body in bodies {
        let results = body["results"].as_object().unwrap();
        assert_eq!(results.len(), 20);
        assert!(results.values().all(|v| v == "available"));
    }

    let pool = server.state().prober.pool();
    assert_eq!(pool.peak_in_flight(), 5);
    assert_eq!(pool.in_flight(), 0);
    assert_eq!(pool.available(), 5);

    server.shutdown().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_default_limit_holds_under_burst() {
    let target = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(200)))
        .mount(&target)
        .await;

    let server = spawn_checker_with(test_probe_config()).await;
    let client = Client::new();

    // 100件 × 2リクエストで同時に200プローブを投入する
    let requests = (0..2).map(|batch| {
        let urls: Vec<String> = (0..100)
            .map(|i| format!("{}/burst/{}/{}", target.uri(), batch, i))
            .collect();
        let client = client.clone();
        let url = server.url();
        async move {
            client
                .post(url)
                .json(&json!({ "urls": urls }))
                .send()
                .await
                .unwrap()
                .json::<Value>()
                .await
                .unwrap()
        }
    });

    let bodies = futures::future::join_all(requests).await;
    for body in bodies {
        assert_eq!(body["results"].as_object().unwrap().len(), 100);
    }

    let pool = server.state().prober.pool();
    assert_eq!(pool.capacity(), 100);
    assert_eq!(pool.peak_in_flight(), 100);
    assert_eq!(pool.in_flight(), 0);

    server.shutdown().await;
}
