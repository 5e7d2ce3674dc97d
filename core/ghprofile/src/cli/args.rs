use crate::domain::ProfileCommand;
use clap::builder::{ArgAction, PossibleValuesParser};
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use std::path::PathBuf;

pub const OPERATIONS: [&str; 3] = ["domain", "evaluate", "area"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -L / --list-profiles: 現在有効なプロファイル一覧を表示
    pub list_profiles: bool,
    /// -v / --verbose: 構造化ログを stderr にも出す
    pub verbose: bool,
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// -i / --input: リクエスト JSON のパス（未指定・`-` は stdin）
    pub input: Option<PathBuf>,
    /// domain | evaluate | area
    pub operation: Option<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

pub(crate) fn build_clap_command() -> clap::Command {
    clap::Command::new("ghprofile")
        .about("Infer technical domains, an overall evaluation or the region of a GitHub user with an LLM")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-profiles")
                .short('L')
                .long("list-profiles")
                .help("List currently available provider profiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Also print structured logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (openai, openai_compat, echo, or a profiles.json entry)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. gpt-4o-mini)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("input")
                .short('i')
                .long("input")
                .value_name("path")
                .help("Read the request JSON from a file ('-' or omitted: stdin)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("operation")
                .index(1)
                .value_name("command")
                .help("domain | evaluate | area")
                .value_parser(PossibleValuesParser::new(OPERATIONS)),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        list_profiles: matches.get_flag("list-profiles"),
        verbose: matches.get_flag("verbose"),
        profile: matches
            .get_one::<String>("profile")
            .map(|s| ProviderName::new(s.clone())),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        input: matches.get_one::<PathBuf>("input").cloned(),
        operation: matches.get_one::<String>("operation").cloned(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args.iter().copied())
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "ghprofile", &mut std::io::stdout());
}

/// Config を ProfileCommand に変換する
pub fn config_to_command(config: Config) -> Result<ProfileCommand, Error> {
    if config.help {
        return Ok(ProfileCommand::Help);
    }
    if config.list_profiles {
        return Ok(ProfileCommand::ListProfiles);
    }
    let input = config.input;
    match config.operation.as_deref() {
        Some("domain") => Ok(ProfileCommand::Domain { input }),
        Some("evaluate") => Ok(ProfileCommand::Evaluate { input }),
        Some("area") => Ok(ProfileCommand::Area { input }),
        Some(other) => Err(Error::invalid_argument(format!("Unknown command: '{}'", other))),
        None => Err(Error::invalid_argument(format!(
            "No command provided. Use one of: {}",
            OPERATIONS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_no_args() {
        let config = parse_args_from(&["ghprofile"]).unwrap();
        assert_eq!(config, Config::default());
        let err = config_to_command(config).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("domain, evaluate, area"));
    }

    #[test]
    fn test_parse_args_help() {
        for flag in ["-h", "--help"] {
            let config = parse_args_from(&["ghprofile", flag]).unwrap();
            assert!(config.help);
            assert_eq!(config_to_command(config).unwrap(), ProfileCommand::Help);
        }
    }

    #[test]
    fn test_parse_args_domain_with_input_profile_model() {
        let config = parse_args_from(&[
            "ghprofile", "-p", "echo", "-m", "gpt-4o", "-i", "req.json", "-v", "domain",
        ])
        .unwrap();
        assert_eq!(config.profile.as_deref(), Some("echo"));
        assert_eq!(config.model.as_deref(), Some("gpt-4o"));
        assert!(config.verbose);
        assert_eq!(
            config_to_command(config).unwrap(),
            ProfileCommand::Domain {
                input: Some(PathBuf::from("req.json"))
            }
        );
    }

    #[test]
    fn test_parse_args_evaluate_and_area_from_stdin() {
        let config = parse_args_from(&["ghprofile", "evaluate"]).unwrap();
        assert_eq!(
            config_to_command(config).unwrap(),
            ProfileCommand::Evaluate { input: None }
        );
        let config = parse_args_from(&["ghprofile", "area", "--input", "-"]).unwrap();
        assert_eq!(
            config_to_command(config).unwrap(),
            ProfileCommand::Area {
                input: Some(PathBuf::from("-"))
            }
        );
    }

    #[test]
    fn test_parse_args_list_profiles() {
        let config = parse_args_from(&["ghprofile", "-L"]).unwrap();
        assert_eq!(config_to_command(config).unwrap(), ProfileCommand::ListProfiles);
    }

    #[test]
    fn test_parse_args_unknown_command_rejected() {
        let err = parse_args_from(&["ghprofile", "summarize"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let err = parse_args_from(&["ghprofile", "--unknown"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }
}
