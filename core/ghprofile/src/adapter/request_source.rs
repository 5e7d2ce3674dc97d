//! リクエスト JSON をファイルか標準入力から読む

use common::error::Error;
use common::ports::outbound::FileSystem;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::ports::outbound::RequestSource;

/// 標準のリクエスト入力（`-i <path>` はファイル、未指定・`-` は stdin）
pub struct FileRequestSource {
    fs: Arc<dyn FileSystem>,
}

impl FileRequestSource {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl RequestSource for FileRequestSource {
    fn read(&self, input: Option<&Path>) -> Result<String, Error> {
        match input {
            Some(path) if path != Path::new("-") => self.fs.read_to_string(path),
            _ => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
                Ok(buf)
            }
        }
    }
}

/// リクエスト JSON を型に変換する（壊れていれば Error::InvalidInput）
pub fn parse_request<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, Error> {
    serde_json::from_str(json).map_err(|e| Error::invalid_input(e.to_string()))
}
