//! check サブコマンド
//!
//! 起動中のサーバーへURLバッチを送信し、応答時間と判定結果の集計を表示します。

use availability_checker_common::{
    protocol::{CheckUrlsRequest, CheckUrlsResponse, ErrorResponse},
    types::Availability,
};
use clap::Args;
use std::fmt::Write as _;
use std::time::{Duration, Instant};

/// check サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Base URL of the running server
    #[arg(
        short,
        long,
        default_value = "http://localhost:8000",
        env = "CHECKER_SERVER_URL"
    )]
    pub server: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 30)]
    pub timeout: u64,

    /// Print the raw JSON response instead of a summary
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// URLs to check
    pub urls: Vec<String>,
}

/// サーバーからの応答
#[derive(Debug)]
pub struct CheckReport {
    /// 送信から応答受信までの時間
    pub elapsed: Duration,
    /// HTTPステータスコード
    pub status: u16,
    /// 成功時は結果、失敗時はエラー詳細
    pub outcome: Result<CheckUrlsResponse, ErrorResponse>,
}

/// Execute the check command
pub async fn execute(args: &CheckArgs) -> Result<(), anyhow::Error> {
    let report = submit(args).await?;

    match &report.outcome {
        Ok(response) if args.json => {
            println!("{}", serde_json::to_string_pretty(response)?);
            Ok(())
        }
        Ok(_) => {
            print!("{}", format_summary(&report));
            Ok(())
        }
        Err(error) => {
            print!("{}", format_summary(&report));
            anyhow::bail!("server rejected batch: {}", error.detail)
        }
    }
}

/// バッチを送信して応答を取得
pub async fn submit(args: &CheckArgs) -> Result<CheckReport, anyhow::Error> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .build()?;
    let endpoint = format!("{}/", args.server.trim_end_matches('/'));
    let request = CheckUrlsRequest {
        urls: args.urls.clone(),
    };

    let start = Instant::now();
    let response = client.post(&endpoint).json(&request).send().await?;
    let elapsed = start.elapsed();
    let status = response.status();

    let outcome = if status.is_success() {
        Ok(response.json::<CheckUrlsResponse>().await?)
    } else {
        let body = response.text().await?;
        Err(serde_json::from_str::<ErrorResponse>(&body)
            .unwrap_or_else(|_| ErrorResponse::new(body)))
    };

    Ok(CheckReport {
        elapsed,
        status: status.as_u16(),
        outcome,
    })
}

/// 応答時間・ステータス・集計を整形
pub fn format_summary(report: &CheckReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Response Time: {:.2}s", report.elapsed.as_secs_f64());
    let _ = writeln!(out, "Status Code: {}", report.status);

    match &report.outcome {
        Ok(response) => {
            let results = &response.results;
            let _ = writeln!(out, "Results Summary:");
            let _ = writeln!(out, "Available: {}", results.available_count());
            let _ = writeln!(out, "Unavailable: {}", results.unavailable_count());

            let mut entries: Vec<(&str, Availability)> = results.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (url, status) in entries {
                let _ = writeln!(out, "{}\t{}", status, url);
            }
        }
        Err(error) => {
            let _ = writeln!(out, "Error: {}", error.detail);
        }
    }

    out
}
