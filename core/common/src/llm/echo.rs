//! Echoプロバイダの実装
//!
//! 実際には LLM API を呼び出さず、送るはずだったプロンプトをそのまま応答として返す。
//! プロンプトの確認やオフラインでの動作確認に使う。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut payload = json!({ "prompt": prompt });
        if let Some(system) = system_instruction {
            payload["system_instruction"] = json!(system);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 往復しない: リクエストをそのままレスポンスとして扱う
        Ok(request_json.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::provider(format!("Failed to parse echo payload: {}", e)))?;
        Ok(v["prompt"].as_str().map(|s| s.to_string()))
    }
}
