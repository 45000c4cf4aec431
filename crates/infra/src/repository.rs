//! # リポジトリ実装
//!
//! アイテムの永続化を担当するリポジトリトレイトと、その具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **ストア抽象化**: DynamoDB 固有の処理を [`DynamoDbItemRepository`] にカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod item_repository;

pub use item_repository::{DynamoDbItemRepository, ItemRepository};
