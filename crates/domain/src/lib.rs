//! # ToDoList ドメイン層
//!
//! アイテムストアが扱うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! アイテムは意図的にスキーマレスであり、任意の JSON オブジェクトをそのまま
//! 保持する。ドメイン層が保証する不変条件は次の 2 つだけ:
//!
//! - **オブジェクトであること**: 配列やスカラーはアイテムになれない
//! - **`id` の形式**: 存在する場合は空でない文字列であること（パーティションキー）
//!
//! ## 依存関係の方向
//!
//! ```text
//! items-function → infra → domain
//!        ↘                   ↑
//!          ─────────────────
//! ```
//!
//! ドメイン層はインフラ層（DynamoDB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`item`] - スキーマレスなアイテムとその識別子
//!
//! ## 使用例
//!
//! ```rust
//! use todolist_domain::item::Item;
//!
//! let item = Item::try_from(serde_json::json!({"id": "1", "name": "milk"})).unwrap();
//! assert_eq!(item.id().unwrap().as_str(), "1");
//! ```

pub mod error;
pub mod item;

pub use error::DomainError;
