//! ドメイン型（Newtype）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use std::path::{Path, PathBuf};

/// 文字列を包む Newtype を定義する（Deref / Display / From / AsRef 付き）
macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_newtype!(
    /// プロファイル名（openai, echo, profiles.json のキー等）
    ProviderName
);

string_newtype!(
    /// モデル名（gpt-4o-mini 等）
    ModelName
);

/// ホームディレクトリ（設定・ログの置き場所）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// JSONL ログファイルのパス
    pub fn log_path(&self) -> PathBuf {
        self.0.join("logs").join("ghprofile.jsonl")
    }
}

impl std::ops::Deref for HomeDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for HomeDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name_deref_and_display() {
        let name = ProviderName::new("echo");
        assert_eq!(&*name, "echo");
        assert_eq!(name.to_string(), "echo");
    }

    #[test]
    fn test_home_dir_log_path() {
        let home = HomeDir::new("/tmp/gh");
        assert_eq!(home.log_path(), PathBuf::from("/tmp/gh/logs/ghprofile.jsonl"));
    }
}
