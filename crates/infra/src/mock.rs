//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todolist-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use todolist_domain::item::{Item, ItemId};

use crate::{InfraError, repository::ItemRepository};

// ===== MockItemRepository =====

/// DynamoDB 実装と同じ意味論を持つインメモリリポジトリ
///
/// - `insert` は既存 id で Conflict
/// - `find_all` は id の昇順
/// - `delete` は存在しない id で `false`
#[derive(Clone, Default)]
pub struct MockItemRepository {
    items: Arc<Mutex<BTreeMap<ItemId, Item>>>,
}

impl MockItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データを持つリポジトリを作成する
    ///
    /// `id` を持たないアイテムは無視する。
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let map = items
            .into_iter()
            .filter_map(|item| item.id().ok().map(|id| (id, item)))
            .collect();
        Self {
            items: Arc::new(Mutex::new(map)),
        }
    }

    /// 格納されているアイテム数
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// アイテムが 1 件も無いか
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn insert(&self, item: &Item) -> Result<(), InfraError> {
        let id = item
            .id()
            .map_err(|e| InfraError::invalid_data(e.to_string()))?;
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&id) {
            return Err(InfraError::conflict("Item", id.as_str()));
        }
        items.insert(id, item.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, InfraError> {
        Ok(self.items.lock().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }

    async fn upsert(&self, item: &Item) -> Result<(), InfraError> {
        let id = item
            .id()
            .map_err(|e| InfraError::invalid_data(e.to_string()))?;
        self.items.lock().unwrap().insert(id, item.clone());
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> Result<bool, InfraError> {
        Ok(self.items.lock().unwrap().remove(id).is_some())
    }

    async fn check_connection(&self) -> Result<(), InfraError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::InfraErrorKind;

    fn item(value: serde_json::Value) -> Item {
        Item::try_from(value).unwrap()
    }

    fn id(value: &str) -> ItemId {
        ItemId::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_insertは既存idでconflictを返す() {
        let sut = MockItemRepository::new();
        sut.insert(&item(json!({"id": "1"}))).await.unwrap();

        let err = sut.insert(&item(json!({"id": "1"}))).await.unwrap_err();

        assert!(matches!(err.kind(), InfraErrorKind::Conflict { .. }));
        assert_eq!(sut.len(), 1);
    }

    #[tokio::test]
    async fn test_upsertは存在しないidで作成し既存idで置換する() {
        let sut = MockItemRepository::new();

        sut.upsert(&item(json!({"id": "1", "v": 1}))).await.unwrap();
        sut.upsert(&item(json!({"id": "1", "v": 2}))).await.unwrap();

        let stored = sut.find_by_id(&id("1")).await.unwrap().unwrap();
        assert_eq!(stored.get("v"), Some(&json!(2)));
        assert_eq!(sut.len(), 1);
    }

    #[tokio::test]
    async fn test_deleteは存在しないidでfalseを返す() {
        let sut = MockItemRepository::with_items([item(json!({"id": "1"}))]);

        assert!(sut.delete(&id("1")).await.unwrap());
        assert!(!sut.delete(&id("1")).await.unwrap());
        assert!(sut.is_empty());
    }

    #[tokio::test]
    async fn test_find_allはid順に全件を返す() {
        let sut = MockItemRepository::with_items([
            item(json!({"id": "b"})),
            item(json!({"id": "a"})),
        ]);

        let all = sut.find_all().await.unwrap();

        let ids: Vec<_> = all.iter().map(|i| i.id().unwrap().into_string()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
