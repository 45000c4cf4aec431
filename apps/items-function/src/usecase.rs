//! # ユースケース層
//!
//! Items Function のアプリケーションロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラのテストでスタブに差し替えられるようトレイトを定義
//! - **依存性注入**: リポジトリは `Arc<dyn ItemRepository>` で外部から注入
//! - **薄いハンドラ**: ボディの検証とエラー種別の変換はユースケースに集約

pub mod item;

use async_trait::async_trait;
pub use item::ItemUseCaseImpl;
use todolist_domain::item::{Item, ItemId};

use crate::error::ItemsError;

/// アイテムユースケーストレイト
#[async_trait]
pub trait ItemUseCase: Send + Sync {
    /// リクエストボディからアイテムを作成し、その id を返す
    async fn create_item(&self, body: &[u8]) -> Result<ItemId, ItemsError>;

    /// id でアイテムを取得する（存在しなければ `ItemsError::NotFound`）
    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemsError>;

    /// 全アイテムを取得する
    async fn list_items(&self) -> Result<Vec<Item>, ItemsError>;

    /// パスの id でアイテムを作成または置換し、保存したアイテムを返す
    async fn upsert_item(&self, id: &ItemId, body: &[u8]) -> Result<Item, ItemsError>;

    /// id でアイテムを削除する（存在しなければ `ItemsError::NotFound`）
    async fn delete_item(&self, id: &ItemId) -> Result<(), ItemsError>;
}

#[async_trait]
impl ItemUseCase for ItemUseCaseImpl {
    async fn create_item(&self, body: &[u8]) -> Result<ItemId, ItemsError> {
        self.create_item(body).await
    }

    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemsError> {
        self.get_item(id).await
    }

    async fn list_items(&self) -> Result<Vec<Item>, ItemsError> {
        self.list_items().await
    }

    async fn upsert_item(&self, id: &ItemId, body: &[u8]) -> Result<Item, ItemsError> {
        self.upsert_item(id, body).await
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), ItemsError> {
        self.delete_item(id).await
    }
}
