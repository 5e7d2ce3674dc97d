//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（OpenAI 互換・Echo など）はこのトレイトを実装する。
/// 呼び出しは同期で、1 回の HTTP 往復が終わるまでスレッドをブロックする。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// 単発プロンプトのリクエストペイロードを生成
    ///
    /// # Arguments
    /// * `prompt` - ユーザーメッセージとして送るプロンプト全文
    /// * `system_instruction` - システム指示（オプション）
    fn make_request_payload(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンス JSON 文字列を取得
    ///
    /// 接続・タイムアウト・本文読み取りの失敗は `Error::Transport`、
    /// 非 2xx ステータスは `Error::Provider` を返す。
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出（存在しない場合は None）
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
