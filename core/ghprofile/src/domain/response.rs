//! 各操作のレスポンス型（呼び出しごとに新しく作る）

use serde::Serialize;

/// 技術領域（出現回数の多い順に最大 3 件）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResponse {
    pub domain: Vec<String>,
}

/// LLM による総合評価（内容は検証しない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResponse {
    pub evaluation: String,
}

/// 推定した国・地区（不明なら "N/A"）と確信度 [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaResponse {
    pub country: String,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_shapes() {
        let d = DomainResponse {
            domain: vec!["后端开发".to_string()],
        };
        assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"domain":["后端开发"]}"#);
        let a = AreaResponse {
            country: "日本".to_string(),
            confidence: 0.8,
        };
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            r#"{"country":"日本","confidence":0.8}"#
        );
    }
}
