//! Outbound ポート: アプリが外界（FS・環境変数・ログ・LLM）を使うための trait

pub mod env_resolver;
pub mod fs;
pub mod log;

pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
// トレイト定義は llm/provider（循環参照を避けるため re-export のみ）
pub use crate::llm::provider::LlmProvider;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
