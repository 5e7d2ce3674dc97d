//! 事前定義の技術領域（プロンプトに候補として並べる。応答の検証には使わない）

pub const TECH_AREAS: [&str; 10] = [
    "前端开发",
    "后端开发",
    "数据科学",
    "人工智能",
    "移动开发",
    "区块链",
    "网络安全",
    "游戏开发",
    "数据库开发",
    "云计算",
];

/// ドメインテンプレートの tech_areas スロット用（カンマ区切り）
pub fn tech_areas_joined() -> String {
    TECH_AREAS.join(",")
}
