//! ghprofile 共通ライブラリ
//!
//! エラー型・LLM プロバイダ・設定・ポートと標準アダプタを提供する。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// LLMプロバイダと profiles.json
pub mod llm;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
