//! LLM プロバイダと設定
//!
//! 単発のプロンプトを送り、応答テキストを受け取るための同期（blocking）実装。

pub mod config;
pub mod echo;
pub mod factory;
pub mod openai_compat;
pub mod provider;
pub mod resolver;

pub use config::{ProfilesConfig, ProviderProfile, ProviderTypeKind};
pub use factory::{create_provider, AnyProvider, ProviderType};
pub use provider::LlmProvider;
pub use resolver::{list_profiles, load_profiles_config, resolve_provider, ResolvedProvider};
