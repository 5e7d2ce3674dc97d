//! プロバイダファクトリー
//!
//! 解決済みプロファイルから適切なプロバイダを作成する。

use crate::domain::ModelName;
use crate::error::Error;
use crate::llm::echo::EchoProvider;
use crate::llm::openai_compat::OpenAiCompatProvider;
use crate::llm::provider::LlmProvider;
use crate::llm::resolver::ResolvedProvider;
use crate::ports::outbound::EnvResolver;
use serde_json::Value;

/// OpenAI 本家で API キーを読む環境変数
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// OpenAI 本家（API キー必須）
    OpenAi,
    /// OpenAI Chat Completions 互換 (/chat/completions)
    OpenAiCompat,
    /// Echo（プロンプトをそのまま返す）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gpt" | "openai" => Some(Self::OpenAi),
            "openai_compat" => Some(Self::OpenAiCompat),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::OpenAiCompat => "openai_compat",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用する。
pub enum AnyProvider {
    OpenAiCompat(OpenAiCompatProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAiCompat(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_request_payload(prompt, system_instruction),
            Self::Echo(p) => p.make_request_payload(prompt, system_instruction),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::OpenAiCompat(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// 解決済みプロファイルからプロバイダを作る
///
/// * `model` - -m 指定（プロファイルのモデルより優先）
/// * `env` - API キーの環境変数を読む（キーはここで一度だけ読む）
pub fn create_provider(
    resolved: &ResolvedProvider,
    model: Option<&ModelName>,
    env: &dyn EnvResolver,
) -> Result<AnyProvider, Error> {
    let model = model
        .map(|m| m.to_string())
        .or_else(|| resolved.model.clone());

    match resolved.provider_type {
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
        ProviderType::OpenAi => {
            let key_env = resolved
                .api_key_env
                .as_deref()
                .unwrap_or(OPENAI_API_KEY_ENV);
            let api_key = env.var(key_env).ok_or_else(|| {
                Error::env(format!(
                    "{} environment variable is not set (profile '{}')",
                    key_env, resolved.profile_name
                ))
            })?;
            OpenAiCompatProvider::new(
                model,
                resolved.base_url.clone(),
                Some(api_key),
                resolved.temperature,
                resolved.timeout_secs,
            )
            .map(AnyProvider::OpenAiCompat)
        }
        ProviderType::OpenAiCompat => {
            let api_key = resolved.api_key_env.as_deref().and_then(|name| env.var(name));
            OpenAiCompatProvider::new(
                model,
                resolved.base_url.clone(),
                api_key,
                resolved.temperature,
                resolved.timeout_secs,
            )
            .map(AnyProvider::OpenAiCompat)
        }
    }
}
