use std::sync::Arc;

use common::adapter::NoopLog;
use common::error::Error;

use crate::adapter::StubLlm;
use crate::domain::{AreaRequest, DomainRequest, EvaluationRequest, Repository};
use crate::prompt::Prompts;
use crate::usecase::ProfileUseCase;

fn use_case(llm: &Arc<StubLlm>) -> ProfileUseCase {
    ProfileUseCase::new(
        Arc::clone(llm) as Arc<dyn crate::ports::outbound::LlmCompletion>,
        Arc::new(Prompts::builtin()),
        Arc::new(NoopLog),
    )
}

fn repo(name: &str) -> Repository {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "language": {"Rust": 80.0, "Shell": 20.0},
        "star": 12,
        "fork": 3,
        "commit": 140,
        "readme": format!("# {}", name)
    }))
    .unwrap()
}

fn evaluation_request(repos: Vec<Repository>) -> EvaluationRequest {
    let mut req: EvaluationRequest = serde_json::from_value(serde_json::json!({
        "bio": "systems programmer",
        "domain": ["操作系统", "云计算"],
        "organizations": ["rust-lang", "tokio-rs"],
        "total_private_repos": 4,
        "total_public_repos": 37,
        "created_at": "2013-06-01T08:30:00Z",
        "disk_usage": 20480,
        "followers": 512,
        "following": 7
    }))
    .unwrap();
    req.repos = repos;
    req
}

#[test]
fn test_get_domain_ranks_labels_across_repos() {
    let llm = Arc::new(StubLlm::texts(&[
        r#"["云计算", "操作系统"]"#,
        r#"["操作系统", "前端开发"]"#,
        r#"["云计算", "操作系统", "人工智能"]"#,
    ]));
    let req = DomainRequest {
        repos: vec![repo("r1"), repo("r2"), repo("r3")],
    };
    let res = use_case(&llm).get_domain(&req).unwrap();
    assert_eq!(res.domain, vec!["操作系统", "云计算", "前端开发"]);

    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[0].contains("r1"));
    assert!(prompts[0].contains("Rust 80%, Shell 20%"));
    assert!(prompts[1].contains("# r2"));
}

#[test]
fn test_get_domain_fewer_than_three_distinct_labels() {
    let llm = Arc::new(StubLlm::texts(&[r#"["数据库"]"#, r#"["数据库"]"#]));
    let req = DomainRequest {
        repos: vec![repo("a"), repo("b")],
    };
    let res = use_case(&llm).get_domain(&req).unwrap();
    assert_eq!(res.domain, vec!["数据库"]);
}

#[test]
fn test_get_domain_aborts_on_first_failure() {
    let llm = Arc::new(StubLlm::new(vec![
        Ok(r#"["云计算"]"#.to_string()),
        Err(Error::transport("connection reset")),
        Ok(r#"["数据库"]"#.to_string()),
    ]));
    let req = DomainRequest {
        repos: vec![repo("r1"), repo("r2"), repo("r3")],
    };
    let err = use_case(&llm).get_domain(&req).unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    // 3 件目は呼ばれない
    assert_eq!(llm.prompts().len(), 2);
}

#[test]
fn test_get_domain_rejects_non_list_reply() {
    let llm = Arc::new(StubLlm::texts(&["云计算、操作系统"]));
    let req = DomainRequest {
        repos: vec![repo("r1")],
    };
    let err = use_case(&llm).get_domain(&req).unwrap_err();
    assert!(matches!(err, Error::InvalidResponseShape { .. }));
    assert_eq!(err.exit_code(), 76);
}

#[test]
fn test_get_evaluation_joins_repo_evaluations_into_final_prompt() {
    let llm = Arc::new(StubLlm::texts(&["good", "ok", "总体评价：优秀"]));
    let req = evaluation_request(vec![repo("r1"), repo("r2")]);
    let res = use_case(&llm).get_evaluation(&req).unwrap();
    assert_eq!(res.evaluation, "总体评价：优秀");

    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[0].contains("r1"));
    assert!(prompts[0].contains("140"));
    let last = &prompts[2];
    assert!(last.contains("r1 的评价：good\nr2 的评价：ok"));
    assert!(last.contains("systems programmer"));
    assert!(last.contains("操作系统,云计算"));
    assert!(last.contains("rust-lang,tokio-rs"));
    assert!(last.contains("2013-06-01T08:30:00Z"));
    assert!(last.contains("20480"));
    assert!(last.contains("512"));
    assert!(last.contains("37"));
}

#[test]
fn test_get_evaluation_without_repos_makes_one_call() {
    let llm = Arc::new(StubLlm::texts(&["新账号，信息较少"]));
    let req = evaluation_request(vec![]);
    let res = use_case(&llm).get_evaluation(&req).unwrap();
    assert_eq!(res.evaluation, "新账号，信息较少");
    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(!prompts[0].contains("的评价："));
}

#[test]
fn test_get_evaluation_aborts_on_repo_failure_without_final_call() {
    let llm = Arc::new(StubLlm::new(vec![
        Ok("good".to_string()),
        Err(Error::transport("reset")),
        Ok("unused".to_string()),
        Ok("总体评价".to_string()),
    ]));
    let req = evaluation_request(vec![repo("r1"), repo("r2"), repo("r3")]);
    let err = use_case(&llm).get_evaluation(&req).unwrap_err();
    assert_eq!(err, Error::transport("reset"));
    // r3 の評価も最終評価も呼ばれない
    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("r2"));
}

#[test]
fn test_get_evaluation_final_call_failure_is_returned() {
    let llm = Arc::new(StubLlm::new(vec![
        Ok("good".to_string()),
        Err(Error::provider("quota exceeded")),
    ]));
    let req = evaluation_request(vec![repo("r1")]);
    let err = use_case(&llm).get_evaluation(&req).unwrap_err();
    assert!(matches!(err, Error::Provider(ref m) if m.contains("quota")));
}

#[test]
fn test_get_area_parses_record() {
    let llm = Arc::new(StubLlm::texts(&[r#"{"country": "日本", "confidence": 0.85}"#]));
    let req: AreaRequest = serde_json::from_value(serde_json::json!({
        "bio": "Tokyo based",
        "company": "@example",
        "location": "Tokyo",
        "followers": {"日本": 30, "中国": 4},
        "following": {"日本": 9}
    }))
    .unwrap();
    let res = use_case(&llm).get_area(&req).unwrap();
    assert_eq!(res.country, "日本");
    assert_eq!(res.confidence, 0.85);

    let prompt = &llm.prompts()[0];
    assert!(prompt.contains("日本: 30, 中国: 4"));
    assert!(prompt.contains("Tokyo based"));
    assert!(prompt.contains(r#"{"country": "<推测的国家或地区>", "confidence": <置信度>}"#));
}

#[test]
fn test_get_area_same_reply_same_response() {
    let reply = r#"{"country": "N/A", "confidence": 0.0}"#;
    let llm = Arc::new(StubLlm::texts(&[reply, reply]));
    let req: AreaRequest = serde_json::from_str("{}").unwrap();
    let uc = use_case(&llm);
    let first = uc.get_area(&req).unwrap();
    let second = uc.get_area(&req).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.country, "N/A");
    let prompts = llm.prompts();
    assert_eq!(prompts[0], prompts[1]);
}

#[test]
fn test_get_area_confidence_out_of_range() {
    let llm = Arc::new(StubLlm::texts(&[r#"{"country": "中国", "confidence": 1.5}"#]));
    let req: AreaRequest = serde_json::from_str("{}").unwrap();
    let err = use_case(&llm).get_area(&req).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { field: "confidence", .. }));
}

#[test]
fn test_builtin_templates_never_miss_slots() {
    // builtin テンプレートと usecase の埋め込みが一致していれば MissingSlot にはならない
    let llm = Arc::new(StubLlm::texts(&[
        r#"["云计算"]"#,
        "fine",
        "overall",
        r#"{"country": "德国", "confidence": 0.4}"#,
    ]));
    let uc = use_case(&llm);
    uc.get_domain(&DomainRequest {
        repos: vec![repo("r1")],
    })
    .unwrap();
    uc.get_evaluation(&evaluation_request(vec![repo("r1")])).unwrap();
    uc.get_area(&serde_json::from_str("{}").unwrap()).unwrap();
    for prompt in llm.prompts() {
        assert!(crate::prompt::unresolved_placeholders(&prompt).is_empty(), "{}", prompt);
    }
}
