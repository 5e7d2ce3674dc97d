//! GitHub リポジトリのドメイン型（呼び出し側が GitHub API から組み立てて渡す）

use serde::Deserialize;
use std::collections::BTreeMap;

/// 1 リポジトリ分の情報（読み取り専用）
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    /// 言語名 -> 使用比率（%）
    #[serde(default)]
    pub language: BTreeMap<String, f64>,
    #[serde(default)]
    pub star: u64,
    #[serde(default)]
    pub fork: u64,
    /// 依頼ユーザーによる commit 数
    #[serde(default)]
    pub commit: u64,
    #[serde(default)]
    pub readme: Option<String>,
}

impl Repository {
    /// 言語比率を「Rust 72.5%, Shell 27.5%」の形にする（比率の降順、同率は名前順）
    pub fn language_summary(&self) -> String {
        let mut entries: Vec<(&String, &f64)> = self.language.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(a.1));
        entries
            .iter()
            .map(|(lang, pct)| format!("{} {}%", lang, pct))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn readme_text(&self) -> &str {
        self.readme.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let repo: Repository = serde_json::from_str(r#"{"name": "dotfiles"}"#).unwrap();
        assert_eq!(repo.name, "dotfiles");
        assert!(repo.language.is_empty());
        assert_eq!(repo.star, 0);
        assert_eq!(repo.readme_text(), "");
    }

    #[test]
    fn test_language_summary_sorted_by_share() {
        let repo: Repository = serde_json::from_str(
            r#"{"name": "r", "language": {"Shell": 27.5, "Rust": 72.5, "C": 27.5}}"#,
        )
        .unwrap();
        assert_eq!(repo.language_summary(), "Rust 72.5%, C 27.5%, Shell 27.5%");
    }

    #[test]
    fn test_language_summary_empty() {
        let repo: Repository = serde_json::from_str(r#"{"name": "r", "language": {}}"#).unwrap();
        assert_eq!(repo.language_summary(), "");
    }
}
