//! ghprofile 固有のドメイン型（型と不変条件）

pub mod command;
pub mod repository;
pub mod request;
pub mod response;
pub mod tech_area;

pub use command::ProfileCommand;
pub use repository::Repository;
pub use request::{text_or_empty, AreaRequest, DomainRequest, EvaluationRequest};
pub use response::{AreaResponse, DomainResponse, EvaluationResponse};
pub use tech_area::tech_areas_joined;
