//! # ToDoList 共有ユーティリティ
//!
//! このクレートは、ToDoList
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, items-function）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - HTTP ミドルウェアとトレーシングは `observability` feature の背後に置く

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
