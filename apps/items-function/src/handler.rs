//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ボディの検証とストア呼び出しは usecase 層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `item`: アイテム CRUD（メソッドディスパッチ）

pub mod health;
pub mod item;

pub use health::{ReadinessState, health_check, readiness_check};
pub use item::{ItemResponse, ItemState, dispatch, handle_item, handle_items};
