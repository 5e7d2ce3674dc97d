//! profiles.json の読み込みとプロバイダ解決

use crate::domain::ProviderName;
use crate::error::Error;
use crate::llm::config::{ProfilesConfig, ProviderTypeKind};
use crate::llm::factory::ProviderType;
use crate::ports::outbound::{EnvResolver, FileSystem};

/// プロファイルも profiles.json の default も無いときに使うプロファイル
pub const DEFAULT_PROFILE: &str = "openai";

/// 解決済みプロバイダ（ProviderType + オプション）
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProvider {
    /// 解決に使ったプロファイル名（例: "local", "openai"）。エラー表示用
    pub profile_name: String,
    pub provider_type: ProviderType,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
    pub temperature: Option<f32>,
    pub timeout_secs: Option<u64>,
}

/// profiles.json を読み込む。ファイルが無ければ Ok(None)、ディレクトリ等や JSON が壊れていれば Err（メッセージにパス含める）
pub fn load_profiles_config(
    fs: &dyn FileSystem,
    env: &dyn EnvResolver,
) -> Result<Option<ProfilesConfig>, Error> {
    let path = env.resolve_profiles_config_path()?;
    match fs.metadata(path.as_path()) {
        Err(_) => return Ok(None),
        Ok(m) if !m.is_file() => {
            return Err(Error::io_msg(format!("{}: not a regular file", path.display())))
        }
        Ok(_) => {}
    }
    let contents = fs.read_to_string(path.as_path())?;
    ProfilesConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}

fn provider_type_of(k: ProviderTypeKind) -> ProviderType {
    match k {
        ProviderTypeKind::Openai => ProviderType::OpenAi,
        ProviderTypeKind::OpenaiCompat => ProviderType::OpenAiCompat,
        ProviderTypeKind::Echo => ProviderType::Echo,
    }
}

/// 利用可能なビルトインプロファイル名
fn builtin_provider_names() -> &'static [&'static str] {
    &["echo", "gpt", "openai", "openai_compat"]
}

/// 要求されたプロファイル名（None の場合は default）と ProfilesConfig から ResolvedProvider を解決する。
/// 不明なプロファイルの場合は Error::invalid_argument（is_usage == true）で利用可能一覧を返す。
pub fn resolve_provider(
    requested: Option<&ProviderName>,
    cfg: Option<&ProfilesConfig>,
) -> Result<ResolvedProvider, Error> {
    let effective_name: &str = requested.map(|r| r.as_ref()).unwrap_or_else(|| {
        cfg.and_then(|c| c.default_provider.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
    });

    // 1) profiles.json に名前があればそれを優先
    if let Some(profile) = cfg.and_then(|c| c.providers.get(effective_name)) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type: provider_type_of(profile.type_),
            base_url: profile.base_url.clone(),
            model: profile.model.clone(),
            api_key_env: profile.api_key_env.clone(),
            temperature: profile.temperature,
            timeout_secs: profile.timeout_secs,
        });
    }

    // 2) ビルトイン
    if let Some(provider_type) = ProviderType::from_str(effective_name) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type,
            base_url: None,
            model: None,
            api_key_env: None,
            temperature: None,
            timeout_secs: None,
        });
    }

    let (available, _) = list_profiles(cfg);
    Err(Error::invalid_argument(format!(
        "Unknown provider: '{}'. Available: {}",
        effective_name,
        available.join(", ")
    )))
}

/// 利用可能なプロファイル名（ソート済み）と、未指定時に使われるプロファイル名を返す
pub fn list_profiles(cfg: Option<&ProfilesConfig>) -> (Vec<String>, Option<String>) {
    let mut names: Vec<String> = builtin_provider_names()
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    if let Some(cfg) = cfg {
        for k in cfg.providers.keys() {
            if !names.contains(k) {
                names.push(k.clone());
            }
        }
    }
    names.sort();
    let default = cfg
        .and_then(|c| c.default_provider.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    (names, Some(default))
}
