//! ユースケース層（応答の解釈・集約・操作の手順）

pub mod aggregate;
pub mod profile;
pub mod response_parser;

pub use profile::ProfileUseCase;
