//! # アイテム
//!
//! ToDoList コンテナに格納されるスキーマレスなドキュメント。
//!
//! ## 設計方針
//!
//! - **スキーマレス**: フィールドは `serde_json::Map` にそのまま保持する
//! - **パーティションキー**: `id` フィールドがパーティションキーを兼ねる
//! - **検証は最小限**: オブジェクトであること、`id` が空でない文字列であることのみ
//!
//! ## 使用例
//!
//! ```rust
//! use todolist_domain::item::{Item, ItemId};
//!
//! let item = Item::from_json_slice(br#"{"name": "bread"}"#).unwrap();
//! let id = ItemId::new("1").unwrap();
//!
//! // PUT ではパスの id をボディに束縛する
//! let item = item.bind_id(&id).unwrap();
//! assert_eq!(item.id().unwrap(), id);
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::DomainError;

/// パーティションキーを兼ねるフィールド名
pub const ID_FIELD: &str = "id";

// =========================================================================
// ItemId
// =========================================================================

/// アイテム ID（値オブジェクト）
///
/// # 不変条件
///
/// - 空文字列ではない
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display("{_0}")]
pub struct ItemId(String);

impl ItemId {
    /// 文字列からアイテム ID を作成する
    ///
    /// # エラー
    ///
    /// 空文字列の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "id は空でない文字列である必要があります".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// 文字列スライスとして参照する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 内部の String を取り出す
    pub fn into_string(self) -> String {
        self.0
    }
}

// =========================================================================
// Item
// =========================================================================

/// スキーマレスなアイテム（エンティティ）
///
/// 任意の JSON オブジェクトを保持する。シリアライズ時はオブジェクトそのものとして
/// 出力される（ラッパーは現れない）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    fields: Map<String, Value>,
}

impl Item {
    /// フィールドのマップからアイテムを作成する
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// リクエストボディ（UTF-8 の JSON）からアイテムを作成する
    ///
    /// # エラー
    ///
    /// JSON として不正、またはオブジェクトでない場合は `DomainError::Validation`。
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| {
            DomainError::Validation(format!("リクエストボディが JSON として不正です: {e}"))
        })?;
        Self::try_from(value)
    }

    /// パーティションキーとなる `id` を取得する
    ///
    /// # エラー
    ///
    /// `id` が存在しない、文字列でない、空文字列のいずれかの場合は
    /// `DomainError::Validation` を返す。
    pub fn id(&self) -> Result<ItemId, DomainError> {
        match self.fields.get(ID_FIELD) {
            Some(Value::String(id)) => ItemId::new(id.as_str()),
            Some(_) => Err(DomainError::Validation(
                "id は文字列である必要があります".to_string(),
            )),
            None => Err(DomainError::Validation("id は必須です".to_string())),
        }
    }

    /// パスで指定された id をアイテムに束縛する（upsert 用）
    ///
    /// - ボディに `id` が無い場合はパスの id を補う
    /// - ボディの `id` がパスの id と一致する場合はそのまま
    /// - 一致しない、または文字列でない場合はエラー
    pub fn bind_id(mut self, id: &ItemId) -> Result<Self, DomainError> {
        match self.fields.get(ID_FIELD) {
            None => {
                self.fields
                    .insert(ID_FIELD.to_string(), Value::String(id.as_str().to_string()));
                Ok(self)
            }
            Some(Value::String(body_id)) if body_id == id.as_str() => Ok(self),
            Some(Value::String(body_id)) => Err(DomainError::Validation(format!(
                "パスの id ({id}) とボディの id ({body_id}) が一致しません"
            ))),
            Some(_) => Err(DomainError::Validation(
                "id は文字列である必要があります".to_string(),
            )),
        }
    }

    /// フィールドのマップを参照する
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// 指定したフィールドの値を取得する
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl TryFrom<Value> for Item {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(DomainError::Validation(
                "リクエストボディは JSON オブジェクトである必要があります".to_string(),
            )),
        }
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        Value::Object(item.fields)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn item(value: Value) -> Item {
        Item::try_from(value).unwrap()
    }

    // ===== ItemId =====

    #[test]
    fn test_item_id_newで文字列を保持する() {
        let id = ItemId::new("abc").unwrap();
        assert_eq!(id.as_str(), "abc");
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn test_item_id_newは空文字列を拒否する() {
        assert!(matches!(ItemId::new(""), Err(DomainError::Validation(_))));
    }

    // ===== Item 生成 =====

    #[test]
    fn test_try_fromでオブジェクトからアイテムを作成できる() {
        let sut = item(json!({"id": "1", "name": "milk"}));
        assert_eq!(sut.get("name"), Some(&json!("milk")));
    }

    #[rstest]
    #[case(json!([1, 2, 3]))]
    #[case(json!("text"))]
    #[case(json!(42))]
    #[case(json!(null))]
    fn test_try_fromはオブジェクト以外を拒否する(#[case] value: Value) {
        assert!(matches!(
            Item::try_from(value),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_from_json_sliceは不正なjsonを拒否する() {
        let result = Item::from_json_slice(b"{not json");
        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("JSON")));
    }

    #[test]
    fn test_from_json_sliceでネストしたドキュメントを保持する() {
        let sut = Item::from_json_slice(br#"{"id":"1","tags":["a","b"],"meta":{"n":1.5}}"#)
            .unwrap();
        assert_eq!(
            Value::from(sut),
            json!({"id": "1", "tags": ["a", "b"], "meta": {"n": 1.5}})
        );
    }

    // ===== id =====

    #[test]
    fn test_idで文字列のidを返す() {
        let sut = item(json!({"id": "42"}));
        assert_eq!(sut.id().unwrap(), ItemId::new("42").unwrap());
    }

    #[rstest]
    #[case::未指定(json!({"name": "milk"}))]
    #[case::数値(json!({"id": 1}))]
    #[case::null(json!({"id": null}))]
    #[case::空文字列(json!({"id": ""}))]
    fn test_idは不正なidでエラーを返す(#[case] value: Value) {
        assert!(matches!(item(value).id(), Err(DomainError::Validation(_))));
    }

    // ===== bind_id =====

    #[test]
    fn test_bind_idはidが無いボディにパスのidを補う() {
        let id = ItemId::new("7").unwrap();
        let sut = item(json!({"name": "bread"})).bind_id(&id).unwrap();
        assert_eq!(Value::from(sut), json!({"id": "7", "name": "bread"}));
    }

    #[test]
    fn test_bind_idは一致するidをそのまま受け入れる() {
        let id = ItemId::new("7").unwrap();
        let sut = item(json!({"id": "7", "name": "bread"}))
            .bind_id(&id)
            .unwrap();
        assert_eq!(sut.id().unwrap(), id);
    }

    #[test]
    fn test_bind_idは一致しないidを拒否する() {
        let id = ItemId::new("7").unwrap();
        let result = item(json!({"id": "8"})).bind_id(&id);
        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("一致しません")));
    }

    #[test]
    fn test_bind_idは文字列以外のidを拒否する() {
        let id = ItemId::new("7").unwrap();
        let result = item(json!({"id": 7})).bind_id(&id);
        assert!(result.is_err());
    }

    // ===== シリアライズ =====

    #[test]
    fn test_serializeはオブジェクトそのものを出力する() {
        let sut = item(json!({"id": "1", "name": "milk"}));
        let json = serde_json::to_string(&sut).unwrap();
        assert_eq!(json, r#"{"id":"1","name":"milk"}"#);
    }
}
