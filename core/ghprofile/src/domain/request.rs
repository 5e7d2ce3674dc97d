//! 各操作のリクエスト型（呼び出しごとに作られ、1 回だけ消費される）

use crate::domain::Repository;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

/// 技術領域推定のリクエスト
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainRequest {
    #[serde(default)]
    pub repos: Vec<Repository>,
}

/// 総合評価のリクエスト
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub repos: Vec<Repository>,
    #[serde(default)]
    pub bio: Option<String>,
    /// 推定済みの技術領域（infer-domain の結果を渡す。無ければ空）
    #[serde(default)]
    pub domain: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub total_private_repos: u64,
    #[serde(default)]
    pub total_public_repos: u64,
    pub created_at: DateTime<Utc>,
    /// KB 単位
    #[serde(default)]
    pub disk_usage: u64,
    #[serde(default, alias = "follower")]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

impl EvaluationRequest {
    pub fn created_at_text(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// 地区推定のリクエスト
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AreaRequest {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// フォロワーの自述地区の分布
    #[serde(default, alias = "follower")]
    pub followers: LocationDistribution,
    /// フォロー中ユーザーの自述地区の分布
    #[serde(default)]
    pub following: LocationDistribution,
}

/// 地区名 -> 人数
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LocationDistribution(BTreeMap<String, u64>);

impl LocationDistribution {
    #[cfg(test)]
    pub fn new(counts: BTreeMap<String, u64>) -> Self {
        Self(counts)
    }

    /// 「中国: 12, 日本: 3」の形にする（人数の降順、同数は名前順）
    pub fn summary(&self) -> String {
        let mut entries: Vec<(&String, &u64)> = self.0.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));
        entries
            .iter()
            .map(|(loc, n)| format!("{}: {}", loc, n))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// 省略可能なテキスト欄はプロンプト上で空文字にする
pub fn text_or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
