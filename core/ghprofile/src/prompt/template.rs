//! プロンプトテンプレートの差し込み
//!
//! `{slot}` の形（英字・数字・`_`・`.`）だけを差し込み位置として扱う。
//! `{"country": ...}` のような JSON 例はそのまま残る。差し込んだ値は再解釈しない。

use common::error::Error;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::OnceLock;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{([A-Za-z_][A-Za-z0-9_.]*)\}").expect("placeholder pattern is valid")
    })
}

/// 名前付きテンプレート（起動時に一度だけ作り、以後は読み取りのみ）
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    name: &'static str,
    text: &'static str,
    /// 参照しているスロット名（初出順・重複なし）
    slots: Vec<String>,
}

impl PromptTemplate {
    pub fn new(name: &'static str, text: &'static str) -> Self {
        let mut slots: Vec<String> = Vec::new();
        for cap in placeholder_re().captures_iter(text) {
            let slot = &cap[1];
            if !slots.iter().any(|s| s == slot) {
                slots.push(slot.to_string());
            }
        }
        Self { name, text, slots }
    }

    #[cfg(test)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[cfg(test)]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// 全スロットを差し込んだ文字列を返す。値の無いスロットがあれば `Error::MissingSlot`。
    pub fn render(&self, values: &SlotValues) -> Result<String, Error> {
        if let Some(missing) = self.slots.iter().find(|s| values.get(s).is_none()) {
            return Err(Error::missing_slot(self.name, missing.as_str()));
        }
        let out = placeholder_re().replace_all(self.text, |caps: &Captures| {
            values.get(&caps[1]).unwrap_or_default().to_string()
        });
        Ok(out.into_owned())
    }
}

/// スロット名 -> 値
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotValues(BTreeMap<String, String>);

impl SlotValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を文字列化して設定する（同名は上書き）
    pub fn with(mut self, slot: &str, value: impl Display) -> Self {
        self.0.insert(slot.to_string(), value.to_string());
        self
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }
}

/// 差し込み後の文字列に `{slot}` 形式が残っていれば、その名前を返す
#[cfg(test)]
pub fn unresolved_placeholders(rendered: &str) -> Vec<String> {
    placeholder_re()
        .captures_iter(rendered)
        .map(|c| c[1].to_string())
        .collect()
}
