//! CLI 層: 引数解析と Config

pub mod args;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
