//! Outbound ポート: アプリが外界（LLM・入力）を使うための trait

pub mod llm_completion;
pub mod request_source;

pub use llm_completion::LlmCompletion;
pub use request_source::RequestSource;
