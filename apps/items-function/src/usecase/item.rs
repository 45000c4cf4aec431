//! # アイテムユースケース
//!
//! リクエストボディの検証とリポジトリ呼び出しを行う。
//!
//! - 作成: ボディの `id` をキーに条件付き書き込み。重複は `Conflict`
//! - 更新: パスの id をキーに upsert。ボディの `id` が無ければ補い、異なれば `BadRequest`
//! - 削除・取得: 存在しなければ `NotFound`
//! - 一覧: 全件（上限なし）

use std::sync::Arc;

use todolist_domain::item::{Item, ItemId};
use todolist_infra::repository::ItemRepository;

use crate::error::ItemsError;

/// アイテムユースケースの実装
pub struct ItemUseCaseImpl {
    repository: Arc<dyn ItemRepository>,
}

impl ItemUseCaseImpl {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_item(&self, body: &[u8]) -> Result<ItemId, ItemsError> {
        let item = Item::from_json_slice(body)?;
        let id = item.id()?;

        self.repository.insert(&item).await?;
        tracing::debug!(%id, "アイテムを作成しました");

        Ok(id)
    }

    pub async fn get_item(&self, id: &ItemId) -> Result<Item, ItemsError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ItemsError::NotFound)
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, ItemsError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn upsert_item(&self, id: &ItemId, body: &[u8]) -> Result<Item, ItemsError> {
        let item = Item::from_json_slice(body)?.bind_id(id)?;

        self.repository.upsert(&item).await?;
        tracing::debug!(%id, "アイテムを更新しました");

        Ok(item)
    }

    pub async fn delete_item(&self, id: &ItemId) -> Result<(), ItemsError> {
        if self.repository.delete(id).await? {
            tracing::debug!(%id, "アイテムを削除しました");
            Ok(())
        } else {
            Err(ItemsError::NotFound)
        }
    }
}
