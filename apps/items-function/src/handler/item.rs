//! # アイテムハンドラ
//!
//! HTTP メソッドでディスパッチする単一のエンドポイント。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | レスポンス |
//! |---------|------|-----------|
//! | POST | `/items` | 201 `Item created successfully` |
//! | GET | `/items` | 200 全アイテムの JSON 配列 |
//! | GET | `/items/{id}` | 200 アイテムの JSON / 404 `Item not found` |
//! | PUT | `/items/{id}` | 200 `Item updated successfully`（upsert） |
//! | DELETE | `/items/{id}` | 200 `Item deleted successfully` / 404 |
//! | その他 | `/items`, `/items/{id}` | 400 `Unsupported HTTP method.` |
//!
//! POST ではパスの id を無視し、ボディの `id` を使う。

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use todolist_domain::item::{Item, ItemId};

use crate::{error::ItemsError, usecase::ItemUseCase};

pub const CREATED_MESSAGE: &str = "Item created successfully";
pub const UPDATED_MESSAGE: &str = "Item updated successfully";
pub const DELETED_MESSAGE: &str = "Item deleted successfully";

/// アイテムハンドラの共有状態
pub struct ItemState {
    pub usecase: Arc<dyn ItemUseCase>,
}

/// ディスパッチ結果
#[derive(Debug, PartialEq)]
pub enum ItemResponse {
    /// プレーンテキストのメッセージ
    Message(StatusCode, &'static str),
    /// 単一アイテム
    Item(Item),
    /// アイテム一覧
    Items(Vec<Item>),
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        match self {
            ItemResponse::Message(status, message) => (status, message).into_response(),
            ItemResponse::Item(item) => Json(item).into_response(),
            ItemResponse::Items(items) => Json(items).into_response(),
        }
    }
}

/// メソッドと id でユースケースを呼び分ける
///
/// axum に依存しない入口。ルーターのハンドラはこれに委譲する。
pub async fn dispatch(
    usecase: &dyn ItemUseCase,
    method: &Method,
    id: Option<&str>,
    body: &[u8],
) -> Result<ItemResponse, ItemsError> {
    tracing::info!("processed a {method} request");

    match *method {
        Method::POST => {
            usecase.create_item(body).await?;
            Ok(ItemResponse::Message(StatusCode::CREATED, CREATED_MESSAGE))
        }
        Method::GET => match id {
            Some(id) => {
                let item = usecase.get_item(&ItemId::new(id)?).await?;
                Ok(ItemResponse::Item(item))
            }
            None => Ok(ItemResponse::Items(usecase.list_items().await?)),
        },
        Method::PUT => {
            let id = required_id(id)?;
            usecase.upsert_item(&id, body).await?;
            Ok(ItemResponse::Message(StatusCode::OK, UPDATED_MESSAGE))
        }
        Method::DELETE => {
            let id = required_id(id)?;
            usecase.delete_item(&id).await?;
            Ok(ItemResponse::Message(StatusCode::OK, DELETED_MESSAGE))
        }
        _ => Err(ItemsError::UnsupportedMethod),
    }
}

fn required_id(id: Option<&str>) -> Result<ItemId, ItemsError> {
    let id = id.ok_or_else(|| ItemsError::BadRequest("パスに id が必要です".to_string()))?;
    Ok(ItemId::new(id)?)
}

// --- ハンドラ ---

/// ANY /items
pub async fn handle_items(
    State(state): State<Arc<ItemState>>,
    method: Method,
    body: Bytes,
) -> Result<ItemResponse, ItemsError> {
    dispatch(state.usecase.as_ref(), &method, None, &body).await
}

/// ANY /items/{id}
pub async fn handle_item(
    State(state): State<Arc<ItemState>>,
    method: Method,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<ItemResponse, ItemsError> {
    dispatch(state.usecase.as_ref(), &method, Some(&id), &body).await
}
