//! 単発 LLM 完了の標準実装（LlmProvider で 1 往復し、応答テキスト全文を返す）

use common::error::Error;
use common::ports::outbound::LlmProvider;
use std::sync::Arc;

use crate::ports::outbound::LlmCompletion;

/// LlmProvider を LlmCompletion として使うアダプタ
pub struct ProviderLlmCompletion {
    provider: Arc<dyn LlmProvider>,
}

impl ProviderLlmCompletion {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }
}

impl LlmCompletion for ProviderLlmCompletion {
    fn complete(&self, prompt: &str) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(prompt, None)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.provider.make_http_request(&request_json)?;
        self.provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| {
                Error::provider(format!(
                    "{} returned a response without message content",
                    self.provider.name()
                ))
            })
    }
}
