//! 人間向けログ（LogRecord → stderr へ 1 行で要点のみ出力）
//!
//! -v / --verbose 指定時に FileJsonLog と並べて使う。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 200;

/// stderr に整形して出力する Log 実装
pub struct StderrLog {
    max_level: LogLevel,
}

impl StderrLog {
    /// `max_level` より詳細なレベル（Debug 等）は出力しない
    pub fn new(max_level: LogLevel) -> Self {
        Self { max_level }
    }
}

/// 1 行に整形する（fields は長すぎれば切り詰める）
fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", record.level.as_str(), record.message);
    if let Some(layer) = &record.layer {
        line = format!("{} ({})", line, layer);
    }
    if let Some(fields) = &record.fields {
        let s = serde_json::to_string(fields).unwrap_or_default();
        if s.chars().count() > FIELDS_SUMMARY_MAX {
            let truncated: String = s.chars().take(FIELDS_SUMMARY_MAX).collect();
            line = format!("{} {}...", line, truncated);
        } else {
            line = format!("{} {}", line, s);
        }
    }
    line
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if record.level <= self.max_level {
            eprintln!("{}", format_line(record));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_layer_and_fields() {
        let rec = LogRecord::new(LogLevel::Info, "llm call")
            .layer("usecase")
            .field("operation", "area");
        assert_eq!(
            format_line(&rec),
            "[info] llm call (usecase) {\"operation\":\"area\"}"
        );
    }

    #[test]
    fn test_format_line_truncates_long_fields() {
        let rec = LogRecord::new(LogLevel::Debug, "x").field("prompt", "a".repeat(500));
        let line = format_line(&rec);
        assert!(line.ends_with("..."));
        assert!(line.chars().count() < 300);
    }
}
