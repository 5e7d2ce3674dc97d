//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・設定ファイル・API キーを環境変数から解決する。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. GHPROFILE_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/ghprofile（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/ghprofile
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// プロバイダプロファイル設定ファイルのパス
    /// GHPROFILE_HOME があれば $GHPROFILE_HOME/config/profiles.json、なければ resolve_home_dir() 直下の profiles.json
    fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error>;

    /// 任意の環境変数（空文字は未設定扱い）
    fn var(&self, name: &str) -> Option<String>;
}
