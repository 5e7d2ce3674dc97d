//! リポジトリごとの結果を 1 つにまとめる

use std::collections::HashMap;

/// 返す技術領域の最大数
pub const TOP_LABELS: usize = 3;

/// 出現回数の多い順に最大 `TOP_LABELS` 件のラベルを返す（同数なら先に現れた順）
pub fn rank_labels(labels: &[String]) -> Vec<String> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        match index.get(label.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label.as_str(), counts.len());
                counts.push((label.as_str(), 1));
            }
        }
    }
    // 安定ソートなので同数は初出順のまま
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TOP_LABELS)
        .map(|(label, _)| label.to_string())
        .collect()
}

/// (リポジトリ名, 評価) を入力順に「<name> 的评价：<text>」の行にして改行で結合する
pub fn join_evaluations(evaluations: &[(String, String)]) -> String {
    evaluations
        .iter()
        .map(|(name, text)| format!("{} 的评价：{}", name, text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rank_by_count() {
        assert_eq!(rank_labels(&labels(&["A", "B", "A", "C", "B", "A"])), ["A", "B", "C"]);
    }

    #[test]
    fn test_rank_fewer_than_three_not_padded() {
        assert_eq!(rank_labels(&labels(&["X", "Y"])), ["X", "Y"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_labels(&[]).is_empty());
    }

    #[test]
    fn test_rank_ties_keep_first_seen_order() {
        assert_eq!(
            rank_labels(&labels(&["D", "C", "B", "A", "A", "B", "C", "D"])),
            ["D", "C", "B"]
        );
        assert_eq!(rank_labels(&labels(&["Z", "Y", "Y", "X", "W"])), ["Y", "Z", "X"]);
    }

    #[test]
    fn test_join_evaluations() {
        let evals = vec![
            ("r1".to_string(), "good".to_string()),
            ("r2".to_string(), "ok".to_string()),
        ];
        assert_eq!(join_evaluations(&evals), "r1 的评价：good\nr2 的评价：ok");
    }

    #[test]
    fn test_join_evaluations_empty() {
        assert_eq!(join_evaluations(&[]), "");
    }
}
