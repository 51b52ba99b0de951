//! 同時実行数制限付きプローバー
//!
//! URLごとにタスクを生成し、チケットプールで同時実行数を制限しながら
//! 全プローブの完了を待って結果を集約する。

use super::pool::TicketPool;
use super::probe::probe_one;
use availability_checker_common::{
    config::ProbeConfig,
    types::{Availability, ProbeOutcome, ProbeResultSet},
};
use futures::{stream::FuturesUnordered, FutureExt, StreamExt};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// 同時実行数制限付きプローバー
///
/// チケットプールは構築時に注入する。cloneしたプローバーは同じプールを共有するため、
/// 同時に処理中の全リクエストで上限を分け合う。
#[derive(Clone, Debug)]
pub struct Prober {
    /// チケットプール（プロセス全体で共有）
    pool: TicketPool,
    /// プローブ設定
    config: Arc<ProbeConfig>,
}

impl Prober {
    /// 既存のチケットプールを使ってプローバーを作成
    pub fn new(pool: TicketPool, config: ProbeConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// 設定の`concurrency_limit`で新しいプールを作成してプローバーを作成
    pub fn from_config(config: ProbeConfig) -> Self {
        let pool = TicketPool::new(config.concurrency_limit);
        Self::new(pool, config)
    }

    /// チケットプール
    pub fn pool(&self) -> &TicketPool {
        &self.pool
    }

    /// プローブ設定
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// 単一URLをプローブ（チケットは取得しない）
    pub async fn probe_one(&self, url: &str) -> Availability {
        probe_one(&self.config, url).await
    }

    /// 全URLをプローブして結果を集約
    ///
    /// 全タスクを生成してから待機する。結果は完了順に書き込むため、
    /// 重複URLは最後に完了したプローブの結果が残る。
    pub async fn probe_all(&self, urls: Vec<String>) -> ProbeResultSet {
        let mut results = ProbeResultSet::with_capacity(urls.len());

        let mut pending: FuturesUnordered<_> = urls
            .into_iter()
            .map(|url| {
                let prober = self.clone();
                let task_url = url.clone();
                let handle =
                    tokio::spawn(async move { prober.probe_with_ticket(&task_url).await });
                handle.map(move |joined| (url, joined))
            })
            .collect();

        while let Some((url, joined)) = pending.next().await {
            let status = match joined {
                Ok(status) => status,
                Err(e) => {
                    // チケットはガードのdropで返却済み
                    error!(url = %url, error = %e, "Probe task did not complete");
                    Availability::Unavailable
                }
            };
            results.record(ProbeOutcome::new(url, status));
        }

        debug!(
            count = results.len(),
            in_flight = self.pool.in_flight(),
            "Probe batch collected"
        );

        results
    }

    /// チケットを取得してからプローブする
    async fn probe_with_ticket(&self, url: &str) -> Availability {
        let _ticket = match self.pool.acquire().await {
            Ok(ticket) => ticket,
            Err(e) => {
                warn!(url = %url, error = %e, "Ticket pool closed, skipping probe");
                return Availability::Unavailable;
            }
        };
        self.probe_one(url).await
    }
}
