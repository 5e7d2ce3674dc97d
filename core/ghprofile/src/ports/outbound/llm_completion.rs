//! 単発 LLM 完了の Outbound ポート（LLM ゲートウェイ）
//!
//! 埋め込み済みのプロンプト全文を 1 回送り、応答テキスト全文を受け取る。

use common::error::Error;

/// 単発の LLM 完了
///
/// 同期呼び出しで、往復が終わるまでブロックする。再試行はしない。
/// 失敗は `Error::Transport`（接続・タイムアウト）か `Error::Provider`（クォータ・不正リクエスト等）。
pub trait LlmCompletion: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, Error>;
}
