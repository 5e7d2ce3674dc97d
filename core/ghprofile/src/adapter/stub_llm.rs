//! テスト用: 用意した応答を順に返す LlmCompletion 実装


#[cfg(test)]
pub use stub::StubLlm;
