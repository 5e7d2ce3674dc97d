//! エラーハンドリング
//!
//! 全レイヤーで共通の `Error` を使う。終了コードは sysexits.h に合わせる。

use thiserror::Error as ThisError;

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// テンプレートが参照するスロットに値が渡されていない（呼び出し側の不整合）
    #[error("template '{template}' is missing slot '{slot}'")]
    MissingSlot { template: String, slot: String },

    /// LLM の応答が期待するリテラル文法に合わない
    #[error("invalid response shape (expected {expected}): {detail}")]
    InvalidResponseShape {
        expected: &'static str,
        detail: String,
    },

    /// 数値フィールドが許容範囲外
    #[error("{field} out of range [0, 1]: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    /// 送信・受信の失敗（接続エラー・タイムアウト等）
    #[error("transport error: {0}")]
    Transport(String),

    /// プロバイダが返したエラー（クォータ・不正リクエスト等）
    #[error("provider error: {0}")]
    Provider(String),

    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),

    /// 入力データ（リクエスト JSON 等）の不正
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Io(String),

    #[error("json error: {0}")]
    Json(String),

    #[error("env error: {0}")]
    Env(String),
}

impl Error {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn missing_slot(template: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::MissingSlot {
            template: template.into(),
            slot: slot.into(),
        }
    }

    pub fn invalid_shape(expected: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidResponseShape {
            expected,
            detail: detail.into(),
        }
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::InvalidInput(_) | Self::Json(_) => 65,
            Self::MissingSlot { .. } | Self::Env(_) => 70,
            Self::Io(_) | Self::Transport(_) | Self::Provider(_) => 74,
            Self::InvalidResponseShape { .. } | Self::OutOfRange { .. } => 76,
        }
    }
}
