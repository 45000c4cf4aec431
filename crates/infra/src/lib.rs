//! # ToDoList インフラ層
//!
//! 外部システム（DynamoDB）との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **ストア接続**: DynamoDB クライアントの作成とテーブルの自動作成
//! - **データ変換**: スキーマレスな JSON と DynamoDB の属性表現の相互変換
//! - **リポジトリ実装**: アイテムの CRUD
//!
//! ## 依存関係
//!
//! ```text
//! items-function → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`dynamodb`] - DynamoDB 接続管理・属性変換
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - `mock` - テスト用インメモリリポジトリ（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todolist_infra::{dynamodb, repository::DynamoDbItemRepository};
//!
//! async fn setup(connection: &dynamodb::StoreConnection) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = dynamodb::create_client(connection).await;
//!     let table_name = dynamodb::ContainerRef::items().table_name();
//!     dynamodb::ensure_items_table(&client, &table_name).await?;
//!
//!     let repository = DynamoDbItemRepository::new(client, table_name);
//!     Ok(())
//! }
//! ```

pub mod dynamodb;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
