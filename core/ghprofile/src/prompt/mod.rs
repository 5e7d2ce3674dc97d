//! プロンプト整形（テンプレート + スロット値 → LLM に送る 1 つのテキスト）

pub mod template;

#[cfg(test)]
pub use template::unresolved_placeholders;
pub use template::{PromptTemplate, SlotValues};

/// 操作ごとの固定テンプレート一式
#[derive(Debug, Clone)]
pub struct Prompts {
    /// slots: tech_areas, repo_name, readme, repo_language
    pub domain: PromptTemplate,
    /// slots: repo_evaluations, bio, domain, followers, following,
    /// total_private_repos, total_public_repos, created_at, organizations, disk_usage
    pub evaluation: PromptTemplate,
    /// slots: repo.name, repo.star, repo.fork, repo.language, repo.commit, repo.readme
    pub repo: PromptTemplate,
    /// slots: bio, company, location, followers, following
    pub area: PromptTemplate,
}

impl Prompts {
    /// バイナリに埋め込んだテンプレートから作る
    pub fn builtin() -> Self {
        Self {
            domain: PromptTemplate::new("domain", include_str!("templates/domain.txt")),
            evaluation: PromptTemplate::new("evaluation", include_str!("templates/evaluation.txt")),
            repo: PromptTemplate::new("repo", include_str!("templates/repo.txt")),
            area: PromptTemplate::new("area", include_str!("templates/area.txt")),
        }
    }
}

impl Default for Prompts {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_all(t: &PromptTemplate) -> SlotValues {
        t.slots()
            .iter()
            .fold(SlotValues::new(), |v, s| v.with(s, format!("<{}>", s)))
    }

    #[test]
    fn test_builtin_slot_sets() {
        let p = Prompts::builtin();
        assert_eq!(p.domain.slots(), ["tech_areas", "repo_name", "readme", "repo_language"]);
        assert_eq!(
            p.evaluation.slots(),
            [
                "repo_evaluations",
                "bio",
                "domain",
                "followers",
                "following",
                "total_private_repos",
                "total_public_repos",
                "created_at",
                "organizations",
                "disk_usage"
            ]
        );
        assert_eq!(
            p.repo.slots(),
            ["repo.name", "repo.star", "repo.fork", "repo.language", "repo.commit", "repo.readme"]
        );
        assert_eq!(p.area.slots(), ["bio", "company", "location", "followers", "following"]);
    }

    #[test]
    fn test_builtin_templates_render_without_leftovers() {
        let p = Prompts::builtin();
        for t in [&p.domain, &p.evaluation, &p.repo, &p.area] {
            let out = t.render(&fill_all(t)).unwrap();
            assert!(unresolved_placeholders(&out).is_empty(), "{}: {}", t.name(), out);
        }
    }

    #[test]
    fn test_builtin_templates_fail_on_each_missing_slot() {
        let p = Prompts::builtin();
        for t in [&p.domain, &p.evaluation, &p.repo, &p.area] {
            for missing in t.slots() {
                let values = t
                    .slots()
                    .iter()
                    .filter(|s| *s != missing)
                    .fold(SlotValues::new(), |v, s| v.with(s, "x"));
                let err = t.render(&values).unwrap_err();
                assert_eq!(err, common::error::Error::missing_slot(t.name(), missing.as_str()));
            }
        }
    }

    #[test]
    fn test_area_template_keeps_return_format() {
        let p = Prompts::builtin();
        let out = p.area.render(&fill_all(&p.area)).unwrap();
        assert!(out.contains(r#"{"country": "<推测的国家或地区>", "confidence": <置信度>}"#));
    }
}
