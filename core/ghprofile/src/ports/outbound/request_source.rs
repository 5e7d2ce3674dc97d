//! リクエスト JSON の読み込み Outbound ポート

use common::error::Error;
use std::path::Path;

/// リクエスト本文（JSON テキスト）を読む
pub trait RequestSource: Send + Sync {
    /// `input` が None または `-` なら標準入力から読む
    fn read(&self, input: Option<&Path>) -> Result<String, Error>;
}
