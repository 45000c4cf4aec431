//! # Items Function エラー定義
//!
//! Items Function 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 未対応メソッドと Not Found はプレーンテキスト、それ以外は
//! RFC 9457 Problem Details（[`ErrorResponse`]）で返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todolist_domain::DomainError;
use todolist_infra::InfraError;
use todolist_shared::ErrorResponse;

/// 未対応メソッドのレスポンスボディ
pub const UNSUPPORTED_METHOD_MESSAGE: &str = "Unsupported HTTP method.";

/// アイテムが存在しない場合のレスポンスボディ
pub const NOT_FOUND_MESSAGE: &str = "Item not found";

/// Items Function で発生するエラー
#[derive(Debug, Error)]
pub enum ItemsError {
    /// GET / POST / PUT / DELETE 以外のメソッド
    #[error("未対応の HTTP メソッドです")]
    UnsupportedMethod,

    /// アイテムが見つからない
    #[error("アイテムが見つかりません")]
    NotFound,

    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// 同じ id のアイテムが既に存在する
    #[error("競合が発生しました: {0}")]
    Conflict(String),

    /// アイテムストアのエラー
    #[error("アイテムストアエラー: {0}")]
    Store(#[source] InfraError),
}

impl From<DomainError> for ItemsError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ItemsError::BadRequest(msg),
        }
    }
}

impl From<InfraError> for ItemsError {
    fn from(err: InfraError) -> Self {
        match err.as_conflict() {
            Some((entity, id)) => ItemsError::Conflict(format!("{entity} '{id}' は既に存在します")),
            None => ItemsError::Store(err),
        }
    }
}

impl IntoResponse for ItemsError {
    fn into_response(self) -> Response {
        let error = match &self {
            ItemsError::UnsupportedMethod => {
                return (StatusCode::BAD_REQUEST, UNSUPPORTED_METHOD_MESSAGE).into_response();
            }
            ItemsError::NotFound => {
                return (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response();
            }
            ItemsError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            ItemsError::Conflict(msg) => ErrorResponse::conflict(msg.clone()),
            ItemsError::Store(e) => {
                tracing::error!(
                    error.kind = "store",
                    error.message = %e,
                    span_trace = %e.span_trace(),
                    "アイテムストアエラー"
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(error.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(error)).into_response()
    }
}
