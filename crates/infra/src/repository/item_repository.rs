//! # ItemRepository
//!
//! アイテムの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **DynamoDB**: アイテムは 1 テーブルに格納し、ハッシュキー `id` をパーティションキーとする
//! - **一意性はストアに委ねる**: 作成時の重複は条件付き書き込み
//!   （`attribute_not_exists`）で検出する
//! - **全件取得**: `Scan` を `LastEvaluatedKey` が尽きるまで繰り返し、全件をメモリに集める
//!   （上限なし）

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, error::DisplayErrorContext, types::AttributeValue};
use todolist_domain::item::{Item, ItemId};

use crate::{
    InfraError,
    dynamodb::{
        PARTITION_KEY,
        attribute::{attributes_to_item, item_to_attributes},
        table_exists,
    },
};

/// エンティティ名（競合エラーのメッセージに使う）
const ENTITY: &str = "Item";

/// アイテムリポジトリトレイト
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// アイテムを新規作成する
    ///
    /// 同じ id のアイテムが既に存在する場合は `InfraErrorKind::Conflict` を返す。
    async fn insert(&self, item: &Item) -> Result<(), InfraError>;

    /// id でアイテムを取得する
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, InfraError>;

    /// コンテナ内の全アイテムを取得する
    async fn find_all(&self) -> Result<Vec<Item>, InfraError>;

    /// アイテムを作成または置換する
    async fn upsert(&self, item: &Item) -> Result<(), InfraError>;

    /// id でアイテムを削除する
    ///
    /// 削除した場合は `true`、アイテムが存在しなかった場合は `false` を返す。
    async fn delete(&self, id: &ItemId) -> Result<bool, InfraError>;

    /// ストアに到達できることを確認する（Readiness Check 用）
    async fn check_connection(&self) -> Result<(), InfraError>;
}

/// DynamoDB 実装の ItemRepository
pub struct DynamoDbItemRepository {
    client:     Client,
    table_name: String,
}

impl DynamoDbItemRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    fn key(id: &ItemId) -> (String, AttributeValue) {
        (
            PARTITION_KEY.to_string(),
            AttributeValue::S(id.as_str().to_string()),
        )
    }
}

#[async_trait]
impl ItemRepository for DynamoDbItemRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, item: &Item) -> Result<(), InfraError> {
        let id = item
            .id()
            .map_err(|e| InfraError::invalid_data(e.to_string()))?;

        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .condition_expression("attribute_not_exists(#pk)")
            .expression_attribute_names("#pk", PARTITION_KEY)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                let is_conflict = err
                    .as_service_error()
                    .map(|e| e.is_conditional_check_failed_exception())
                    .unwrap_or(false);
                if is_conflict {
                    Err(InfraError::conflict(ENTITY, id.as_str()))
                } else {
                    Err(InfraError::dynamo_db(format!(
                        "アイテムの作成に失敗: {}",
                        DisplayErrorContext(&err)
                    )))
                }
            }
        }
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, InfraError> {
        let (key_name, key_value) = Self::key(id);

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| {
                InfraError::dynamo_db(format!(
                    "アイテムの取得に失敗: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        output.item.map(attributes_to_item).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
        let mut items = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        let mut pages = 0_usize;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(|e| {
                    InfraError::dynamo_db(format!(
                        "アイテムの一覧取得に失敗: {}",
                        DisplayErrorContext(&e)
                    ))
                })?;
            pages += 1;

            for attributes in output.items.unwrap_or_default() {
                items.push(attributes_to_item(attributes)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(pages, count = items.len(), "全アイテムを取得しました");

        Ok(items)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn upsert(&self, item: &Item) -> Result<(), InfraError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| {
                InfraError::dynamo_db(format!(
                    "アイテムの更新に失敗: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &ItemId) -> Result<bool, InfraError> {
        let (key_name, key_value) = Self::key(id);

        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .condition_expression("attribute_exists(#pk)")
            .expression_attribute_names("#pk", PARTITION_KEY)
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) => {
                let is_missing = err
                    .as_service_error()
                    .map(|e| e.is_conditional_check_failed_exception())
                    .unwrap_or(false);
                if is_missing {
                    Ok(false)
                } else {
                    Err(InfraError::dynamo_db(format!(
                        "アイテムの削除に失敗: {}",
                        DisplayErrorContext(&err)
                    )))
                }
            }
        }
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn check_connection(&self) -> Result<(), InfraError> {
        if table_exists(&self.client, &self.table_name).await? {
            Ok(())
        } else {
            Err(InfraError::dynamo_db(format!(
                "テーブル '{}' が存在しません",
                self.table_name
            )))
        }
    }
}
