//! LLM 応答テキストの解釈
//!
//! 応答はデータとしてのみ読む（コードとして評価しない）。受け付けるのは JSON のリテラル文法で、
//! 文字列のリスト（List モード）か、文字列 1 つと数値 1 つのフラットなオブジェクト（Record モード）だけ。

use common::error::Error;
use serde::Deserialize;
use serde_json::Value;

const LIST_SHAPE: &str = "list of strings";
const RECORD_SHAPE: &str = r#"{"country": string, "confidence": number}"#;

/// List モード: `["前端开发", "云计算"]` を順序どおりのラベル列にする
///
/// 重複や事前定義外のラベルもそのまま返す。単引用符の Python 風リテラルは受け付けない。
pub fn parse_label_list(text: &str) -> Result<Vec<String>, Error> {
    serde_json::from_str::<Vec<String>>(text.trim())
        .map_err(|e| Error::invalid_shape(LIST_SHAPE, format!("{}: {}", e, snippet(text))))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AreaRecord {
    country: String,
    confidence: f64,
}

/// Record モード: `{"country": "日本", "confidence": 0.8}` を (地区, 確信度) にする
///
/// 確信度が [0, 1] の外なら `Error::OutOfRange`。f64 に収まらない数値（`1e400` など）は
/// JSON として読めないので `Error::InvalidResponseShape`。
pub fn parse_area_record(text: &str) -> Result<(String, f64), Error> {
    let shape_err =
        |detail: String| Error::invalid_shape(RECORD_SHAPE, format!("{}: {}", detail, snippet(text)));
    // 配列形式（["日本", 0.5]）は受け付けない
    let value: Value = serde_json::from_str(text.trim()).map_err(|e| shape_err(e.to_string()))?;
    if !value.is_object() {
        return Err(shape_err("not an object".to_string()));
    }
    let record: AreaRecord = serde_json::from_value(value).map_err(|e| shape_err(e.to_string()))?;
    if !(0.0..=1.0).contains(&record.confidence) {
        return Err(Error::OutOfRange {
            field: "confidence",
            value: record.confidence,
        });
    }
    Ok((record.country, record.confidence))
}

/// エラーメッセージ用に応答の先頭だけを切り出す
fn snippet(text: &str) -> String {
    const MAX: usize = 80;
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(MAX).collect();
    format!("{}...", head)
}
