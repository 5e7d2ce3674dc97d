//! CLI から解釈したコマンド（ディスパッチは main に集約）

use std::path::PathBuf;

/// 実行する操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileCommand {
    Help,
    ListProfiles,
    /// infer-domain
    Domain { input: Option<PathBuf> },
    /// evaluate-profile
    Evaluate { input: Option<PathBuf> },
    /// infer-area
    Area { input: Option<PathBuf> },
}

impl ProfileCommand {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::ListProfiles => "list-profiles",
            Self::Domain { .. } => "domain",
            Self::Evaluate { .. } => "evaluate",
            Self::Area { .. } => "area",
        }
    }
}
