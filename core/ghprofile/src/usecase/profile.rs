//! ghprofile のユースケース（プロンプト整形 → LLM → 解釈 → 集約）
//!
//! 各操作は同期で、LLM 呼び出しは直列に 1 回ずつ行う。どこかで失敗したらその場で Err を返し、
//! 途中までの集約結果は返さない。再試行はしない。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{
    tech_areas_joined, text_or_empty, AreaRequest, AreaResponse, DomainRequest, DomainResponse,
    EvaluationRequest, EvaluationResponse,
};
use crate::ports::outbound::LlmCompletion;
use crate::prompt::{Prompts, SlotValues};
use crate::usecase::aggregate::{join_evaluations, rank_labels};
use crate::usecase::response_parser::{parse_area_record, parse_label_list};

/// 推定・評価のユースケース
///
/// 依存（テンプレート・LLM・ログ）は起動時に組み立てて注入し、以後は読み取りのみ。
pub struct ProfileUseCase {
    llm: Arc<dyn LlmCompletion>,
    prompts: Arc<Prompts>,
    log: Arc<dyn Log>,
}

impl ProfileUseCase {
    pub fn new(llm: Arc<dyn LlmCompletion>, prompts: Arc<Prompts>, log: Arc<dyn Log>) -> Self {
        Self { llm, prompts, log }
    }

    /// infer-domain: リポジトリごとに領域を聞き、全ラベルから上位 3 件を返す
    pub fn get_domain(&self, req: &DomainRequest) -> Result<DomainResponse, Error> {
        let tech_areas = tech_areas_joined();
        let mut labels: Vec<String> = Vec::new();
        for repo in &req.repos {
            let prompt = self.prompts.domain.render(
                &SlotValues::new()
                    .with("tech_areas", &tech_areas)
                    .with("repo_name", &repo.name)
                    .with("readme", repo.readme_text())
                    .with("repo_language", repo.language_summary()),
            )?;
            let text = self.call("domain", Some(&repo.name), &prompt)?;
            labels.extend(parse_label_list(&text)?);
        }

        let domain = rank_labels(&labels);
        self.emit(
            LogRecord::new(LogLevel::Info, "domain inferred")
                .field("repos", req.repos.len())
                .field("labels", labels.len())
                .field("domain", domain.clone()),
        );
        Ok(DomainResponse { domain })
    }

    /// evaluate-profile: リポジトリごとの評価を集め、アカウント情報と合わせて最終評価を 1 回聞く
    pub fn get_evaluation(&self, req: &EvaluationRequest) -> Result<EvaluationResponse, Error> {
        let mut evaluations: Vec<(String, String)> = Vec::with_capacity(req.repos.len());
        for repo in &req.repos {
            let prompt = self.prompts.repo.render(
                &SlotValues::new()
                    .with("repo.name", &repo.name)
                    .with("repo.star", repo.star)
                    .with("repo.fork", repo.fork)
                    .with("repo.language", repo.language_summary())
                    .with("repo.commit", repo.commit)
                    .with("repo.readme", repo.readme_text()),
            )?;
            // 評価文は自由記述のため解釈しない
            let text = self.call("repo_evaluation", Some(&repo.name), &prompt)?;
            evaluations.push((repo.name.clone(), text));
        }

        let prompt = self.prompts.evaluation.render(
            &SlotValues::new()
                .with("repo_evaluations", join_evaluations(&evaluations))
                .with("bio", text_or_empty(&req.bio))
                .with("domain", req.domain.join(","))
                .with("followers", req.followers)
                .with("following", req.following)
                .with("total_private_repos", req.total_private_repos)
                .with("total_public_repos", req.total_public_repos)
                .with("created_at", req.created_at_text())
                .with("organizations", req.organizations.join(","))
                .with("disk_usage", req.disk_usage),
        )?;
        let evaluation = self.call("evaluation", None, &prompt)?;
        self.emit(
            LogRecord::new(LogLevel::Info, "profile evaluated")
                .field("repos", req.repos.len())
                .field("evaluation_chars", evaluation.chars().count()),
        );
        Ok(EvaluationResponse { evaluation })
    }

    /// infer-area: 1 回だけ聞き、{"country", "confidence"} として解釈する
    pub fn get_area(&self, req: &AreaRequest) -> Result<AreaResponse, Error> {
        let prompt = self.prompts.area.render(
            &SlotValues::new()
                .with("bio", text_or_empty(&req.bio))
                .with("company", text_or_empty(&req.company))
                .with("location", text_or_empty(&req.location))
                .with("followers", req.followers.summary())
                .with("following", req.following.summary()),
        )?;
        let text = self.call("area", None, &prompt)?;
        let (country, confidence) = parse_area_record(&text)?;
        self.emit(
            LogRecord::new(LogLevel::Info, "area inferred")
                .field("country", country.as_str())
                .field("confidence", confidence),
        );
        Ok(AreaResponse {
            country,
            confidence,
        })
    }

    /// LLM を 1 回呼ぶ（前後をログに残す）
    fn call(&self, operation: &str, repo: Option<&str>, prompt: &str) -> Result<String, Error> {
        let mut rec = LogRecord::new(LogLevel::Debug, "llm call")
            .field("operation", operation)
            .field("prompt_chars", prompt.chars().count());
        if let Some(repo) = repo {
            rec = rec.field("repo", repo);
        }
        self.emit(rec);

        self.llm.complete(prompt).map_err(|e| {
            self.emit(
                LogRecord::new(LogLevel::Warn, "llm call failed")
                    .kind("error")
                    .field("operation", operation)
                    .field("error", e.to_string()),
            );
            e
        })
    }

    /// ログの書き込み失敗はリクエストを失敗させない
    fn emit(&self, record: LogRecord) {
        let _ = self.log.log(&record.layer("usecase"));
    }
}
