//! 共通型定義
//!
//! Availability, ProbeOutcome, ProbeResultSet等のコアデータ型

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// URLの稼働判定結果
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// リダイレクト追従後のステータスが400未満
    Available,
    /// ステータス400以上、または通信失敗・タイムアウト
    Unavailable,
}

impl Availability {
    /// ステータスコードから判定する
    pub fn from_status(status: u16) -> Self {
        if status < 400 {
            Self::Available
        } else {
            Self::Unavailable
        }
    }

    /// ワイヤ上の文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }

    /// 稼働中ならtrue
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1URL分のプローブ結果
///
/// リクエスト内でURLごとに1度だけ生成され、以後変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    url: String,
    status: Availability,
}

impl ProbeOutcome {
    /// 結果を生成
    pub fn new(url: impl Into<String>, status: Availability) -> Self {
        Self {
            url: url.into(),
            status,
        }
    }

    /// 対象URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// 判定結果
    pub fn status(&self) -> Availability {
        self.status
    }
}

/// URL → 判定結果のマッピング
///
/// 同一URLが複数回含まれる場合は後から書き込まれた結果で上書きされる。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProbeResultSet(HashMap<String, Availability>);

impl ProbeResultSet {
    /// 空の結果セットを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 容量を指定して作成
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity(capacity))
    }

    /// 結果を書き込む（同一URLは上書き）
    pub fn record(&mut self, outcome: ProbeOutcome) {
        self.0.insert(outcome.url, outcome.status);
    }

    /// URLの判定結果を取得
    pub fn get(&self, url: &str) -> Option<Availability> {
        self.0.get(url).copied()
    }

    /// エントリ数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 空ならtrue
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// availableのエントリ数
    pub fn available_count(&self) -> usize {
        self.0.values().filter(|s| s.is_available()).count()
    }

    /// unavailableのエントリ数
    pub fn unavailable_count(&self) -> usize {
        self.len() - self.available_count()
    }

    /// エントリを走査
    pub fn iter(&self) -> impl Iterator<Item = (&str, Availability)> {
        self.0.iter().map(|(url, status)| (url.as_str(), *status))
    }
}

impl FromIterator<ProbeOutcome> for ProbeResultSet {
    fn from_iter<I: IntoIterator<Item = ProbeOutcome>>(iter: I) -> Self {
        let mut set = Self::new();
        for outcome in iter {
            set.record(outcome);
        }
        set
    }
}
