//! # DynamoDB 接続管理
//!
//! アイテムストアとして使う Amazon DynamoDB への接続管理を行う。
//!
//! ## 設計方針
//!
//! - **明示的な初期化**: クライアントは起動時に一度だけ作成し、DI で各コンポーネントに渡す
//! - **静的クレデンシャル**: エンドポイント URI とアクセスキーは設定から与える
//! - **テーブル自動作成**: 起動時にテーブルが存在しなければ作成（冪等）
//!
//! ## コンテナとテーブルの対応
//!
//! DynamoDB にはデータベースの階層が無いため、[`ContainerRef`] の
//! `{database}.{container}` をテーブル名として使う（例: `ToDoList.Items`）。
//! ハッシュキーは `id` (String) で、アイテムの `id` フィールドがそのまま
//! パーティションキーになる。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todolist_infra::dynamodb::{self, ContainerRef, StoreConnection};
//!
//! async fn setup(connection: &StoreConnection) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = dynamodb::create_client(connection).await;
//!     let container = ContainerRef::items();
//!     dynamodb::ensure_items_table(&client, &container.table_name()).await?;
//!     Ok(())
//! }
//! ```

pub mod attribute;

use aws_sdk_dynamodb::{
    Client,
    config::Credentials,
    error::DisplayErrorContext,
    types::{AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType},
};

use crate::InfraError;

/// データベース名（固定）
pub const DATABASE_NAME: &str = "ToDoList";

/// コンテナ名（固定）
pub const CONTAINER_NAME: &str = "Items";

/// パーティションキーの属性名
pub const PARTITION_KEY: &str = "id";

/// クレデンシャルプロバイダ名（SDK のログに表示される）
const CREDENTIALS_PROVIDER_NAME: &str = "items-function";

/// ストアへの接続情報
#[derive(Clone)]
pub struct StoreConnection {
    /// エンドポイント URI（例: `http://localhost:18000`）
    pub endpoint_uri:      String,
    /// アクセスキー ID
    pub access_key_id:     String,
    /// シークレットアクセスキー
    pub secret_access_key: String,
    /// 署名リージョン
    pub region:            String,
}

impl std::fmt::Debug for StoreConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // シークレットはログに出さない
        f.debug_struct("StoreConnection")
            .field("endpoint_uri", &self.endpoint_uri)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("region", &self.region)
            .finish()
    }
}

/// データベース内の名前付きコレクションへの参照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub database:  String,
    pub container: String,
}

impl ContainerRef {
    pub fn new(database: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            database:  database.into(),
            container: container.into(),
        }
    }

    /// アイテムコンテナ（`ToDoList` / `Items`）への参照
    pub fn items() -> Self {
        Self::new(DATABASE_NAME, CONTAINER_NAME)
    }

    /// 物理テーブル名（`{database}.{container}`）
    pub fn table_name(&self) -> String {
        format!("{}.{}", self.database, self.container)
    }
}

/// DynamoDB クライアントを作成する
///
/// 設定で与えられたエンドポイント・アクセスキー・リージョンを使用する。
/// 作成したクライアントは読み取り専用で、複数リクエストから並行に使ってよい。
pub async fn create_client(connection: &StoreConnection) -> Client {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .endpoint_url(connection.endpoint_uri.as_str())
        .region(aws_config::Region::new(connection.region.clone()))
        .credentials_provider(Credentials::new(
            connection.access_key_id.as_str(),
            connection.secret_access_key.as_str(),
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        ))
        .load()
        .await;

    Client::new(&config)
}

/// テーブルが存在するかを確認する
///
/// `ResourceNotFoundException` のみを「存在しない」と解釈し、
/// それ以外の失敗はエラーとして返す。
pub async fn table_exists(client: &Client, table_name: &str) -> Result<bool, InfraError> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(_) => Ok(true),
        Err(err) => {
            let not_found = err
                .as_service_error()
                .map(|e| e.is_resource_not_found_exception())
                .unwrap_or(false);
            if not_found {
                Ok(false)
            } else {
                Err(InfraError::dynamo_db(format!(
                    "テーブル '{}' の確認に失敗: {}",
                    table_name,
                    DisplayErrorContext(&err)
                )))
            }
        }
    }
}

/// アイテムテーブルが存在しなければ作成する（冪等）
///
/// テーブルスキーマ:
/// - PK: `id` (String): アイテム ID（パーティションキー）
/// - 課金: オンデマンド
pub async fn ensure_items_table(client: &Client, table_name: &str) -> Result<(), InfraError> {
    if table_exists(client, table_name).await? {
        tracing::debug!("テーブル '{}' は既に存在します", table_name);
        return Ok(());
    }

    tracing::info!("テーブル '{}' を作成します", table_name);

    let create_result = client
        .create_table()
        .table_name(table_name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(PARTITION_KEY)
                .key_type(KeyType::Hash)
                .build()
                .map_err(|e| InfraError::dynamo_db(format!("KeySchema 構築エラー: {e}")))?,
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(PARTITION_KEY)
                .attribute_type(ScalarAttributeType::S)
                .build()
                .map_err(|e| {
                    InfraError::dynamo_db(format!("AttributeDefinition 構築エラー: {e}"))
                })?,
        )
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await;

    if let Err(err) = create_result {
        // ResourceInUseException は並行起動時に発生しうる（テーブルが作成中）
        let is_resource_in_use = err
            .as_service_error()
            .map(|e| e.is_resource_in_use_exception())
            .unwrap_or(false);
        if !is_resource_in_use {
            return Err(InfraError::dynamo_db(format!(
                "テーブル '{}' の作成に失敗: {}",
                table_name,
                DisplayErrorContext(&err)
            )));
        }
        tracing::debug!(
            "テーブル '{}' は既に作成中または存在します（ResourceInUseException）",
            table_name
        );
        return Ok(());
    }

    tracing::info!("テーブル '{}' を作成しました", table_name);

    Ok(())
}
