mod adapter;
mod cli;
mod domain;
mod ports;
mod prompt;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::process;

use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;

use adapter::parse_request;
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::{AreaRequest, DomainRequest, EvaluationRequest, ProfileCommand};
use ports::inbound::RunProfileApp;
use wiring::{wire_app, App};

/// ProfileCommand をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }

    /// リクエスト JSON を読んで型に変換する
    fn read_request<T: DeserializeOwned>(&self, input: Option<&Path>) -> Result<T, Error> {
        let json = self.app.request_source.read(input)?;
        parse_request(&json)
    }
}

/// 応答を 1 行の JSON として stdout に出す
fn print_response<T: Serialize>(response: &T) -> Result<i32, Error> {
    let line = serde_json::to_string(response).map_err(|e| Error::json(e.to_string()))?;
    println!("{}", line);
    Ok(0)
}

impl RunProfileApp for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let profile = config.profile.clone();
        let model = config.model.clone();
        let cmd = config_to_command(config)?;
        let command_name = cmd.name();
        self.log(
            LogRecord::new(LogLevel::Info, "command started")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            ProfileCommand::Help => {
                print_help();
                Ok(0)
            }
            ProfileCommand::ListProfiles => self.app.list_profiles().map(|(names, default)| {
                for name in &names {
                    if default.as_deref() == Some(name.as_str()) {
                        println!("{} (default)", name);
                    } else {
                        println!("{}", name);
                    }
                }
                0
            }),
            ProfileCommand::Domain { input } => self
                .read_request::<DomainRequest>(input.as_deref())
                .and_then(|req| {
                    let uc = self.app.profile_use_case(profile.as_ref(), model.as_ref())?;
                    print_response(&uc.get_domain(&req)?)
                }),
            ProfileCommand::Evaluate { input } => self
                .read_request::<EvaluationRequest>(input.as_deref())
                .and_then(|req| {
                    let uc = self.app.profile_use_case(profile.as_ref(), model.as_ref())?;
                    print_response(&uc.get_evaluation(&req)?)
                }),
            ProfileCommand::Area { input } => self
                .read_request::<AreaRequest>(input.as_deref())
                .and_then(|req| {
                    let uc = self.app.profile_use_case(profile.as_ref(), model.as_ref())?;
                    print_response(&uc.get_area(&req)?)
                }),
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        self.log(
            LogRecord::new(LogLevel::Info, "command finished")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.log(LogRecord::new(LogLevel::Error, e.to_string()).kind("error"));
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("ghprofile: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let runner = Runner {
        app: wire_app(config.verbose),
    };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: ghprofile [options] <domain|evaluate|area>");
}

fn print_help() {
    println!("Usage: ghprofile [options] <domain|evaluate|area>");
    println!("Commands:");
    println!("  domain      Infer the top 3 technical domains from the user's repositories");
    println!("  evaluate    Evaluate each repository, then write an overall evaluation of the account");
    println!("  area        Infer the country or region of the account with a confidence in [0, 1]");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -L, --list-profiles        List currently available provider profiles (from profiles.json + built-ins)");
    println!("  -i, --input <path>         Read the request JSON from a file. Default: stdin ('-' also means stdin)");
    println!("  -p, --profile <profile>    Specify LLM profile (openai, openai_compat, echo, etc.). Default: profiles.json default, or openai if not set.");
    println!("  -m, --model <model>        Specify model name (e.g. gpt-4o-mini). Default: profile default from profiles.json");
    println!("  -v, --verbose              Also print structured logs to stderr");
    println!("  --generate <shell>         Generate shell completion script (bash, zsh, fish). Source the output to enable tab completion.");
    println!();
    println!("Environment:");
    println!("  GHPROFILE_HOME    Home directory. Profiles: $GHPROFILE_HOME/config/profiles.json; logs: $GHPROFILE_HOME/logs/");
    println!("                    If unset, $XDG_CONFIG_HOME/ghprofile (e.g. ~/.config/ghprofile) is used.");
    println!("  OPENAI_API_KEY    API key for the openai profile (profiles.json can name another variable with api_key_env)");
    println!();
    println!("Output:");
    println!("  One JSON object on stdout: {{\"domain\": [...]}}, {{\"evaluation\": \"...\"}} or {{\"country\": \"...\", \"confidence\": 0.8}}");
    println!();
    println!("Examples:");
    println!("  ghprofile domain -i repos.json");
    println!("  ghprofile -p echo evaluate < user.json");
    println!("  ghprofile -p local -m qwen2.5 area -i area.json");
}
