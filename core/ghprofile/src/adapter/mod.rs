//! アダプター（ports::outbound の標準実装とテスト用 Stub）

pub mod llm_completion;
pub mod request_source;
pub mod stub_llm;

pub use llm_completion::ProviderLlmCompletion;
pub use request_source::{parse_request, FileRequestSource};
#[cfg(test)]
pub use stub_llm::StubLlm;
