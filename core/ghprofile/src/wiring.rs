//! 配線: 標準アダプタで App と ProfileUseCase を組み立てる

use std::sync::Arc;

use common::adapter::{CompositeLog, FileJsonLog, NoopLog, StdEnvResolver, StdFileSystem, StderrLog};
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use common::llm::{create_provider, list_profiles, load_profiles_config, resolve_provider, LlmProvider};
use common::ports::outbound::{EnvResolver, FileSystem, Log, LogLevel};

use crate::adapter::{FileRequestSource, ProviderLlmCompletion};
use crate::ports::outbound::{LlmCompletion, RequestSource};
use crate::prompt::Prompts;
use crate::usecase::ProfileUseCase;

/// main が使う依存一式（起動時に一度だけ組み立てる）
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
    pub request_source: Arc<dyn RequestSource>,
    pub prompts: Arc<Prompts>,
}

impl App {
    /// プロファイル名とモデル指定から LLM を解決し、ユースケースを組み立てる。
    /// profiles.json が壊れている・API キーが無い等はここで Err になる。
    pub fn profile_use_case(
        &self,
        profile: Option<&ProviderName>,
        model: Option<&ModelName>,
    ) -> Result<ProfileUseCase, Error> {
        let cfg = load_profiles_config(self.fs.as_ref(), self.env_resolver.as_ref())?;
        let resolved = resolve_provider(profile, cfg.as_ref())?;
        let provider: Arc<dyn LlmProvider> =
            Arc::new(create_provider(&resolved, model, self.env_resolver.as_ref())?);
        let llm: Arc<dyn LlmCompletion> = Arc::new(ProviderLlmCompletion::new(provider));
        Ok(ProfileUseCase::new(
            llm,
            Arc::clone(&self.prompts),
            Arc::clone(&self.logger),
        ))
    }

    /// 利用可能なプロファイル名と default
    pub fn list_profiles(&self) -> Result<(Vec<String>, Option<String>), Error> {
        let cfg = load_profiles_config(self.fs.as_ref(), self.env_resolver.as_ref())?;
        Ok(list_profiles(cfg.as_ref()))
    }
}

/// 配線: 標準の環境変数解決で App を組み立てる
pub fn wire_app(verbose: bool) -> App {
    wire_app_with_env(Arc::new(StdEnvResolver), verbose)
}

/// 配線: 環境変数解決を差し替えて App を組み立てる（テストではホームを一時ディレクトリにする）
pub fn wire_app_with_env(env_resolver: Arc<dyn EnvResolver>, verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);

    // ホームが解決できなければファイルログは出さない
    let file_log: Arc<dyn Log> = match env_resolver.resolve_home_dir() {
        Ok(home) => Arc::new(FileJsonLog::new(Arc::clone(&fs), home.log_path())),
        Err(_) => Arc::new(NoopLog),
    };
    let logger: Arc<dyn Log> = if verbose {
        Arc::new(CompositeLog::new(vec![
            file_log,
            Arc::new(StderrLog::new(LogLevel::Debug)),
        ]))
    } else {
        file_log
    };

    let request_source: Arc<dyn RequestSource> = Arc::new(FileRequestSource::new(Arc::clone(&fs)));
    App {
        fs,
        env_resolver,
        logger,
        request_source,
        prompts: Arc::new(Prompts::builtin()),
    }
}
