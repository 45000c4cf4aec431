//! # ヘルスチェックハンドラ
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready`: Readiness Check（アイテムストアへの到達性を確認）
//!
//! レスポンス型は [`todolist_shared::HealthResponse`] / [`todolist_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use todolist_infra::repository::ItemRepository;
use todolist_shared::{CheckStatus, HealthResponse, ReadinessResponse};

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Items Function のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub repository: Arc<dyn ItemRepository>,
}

/// Items Function の Readiness Check エンドポイント
///
/// アイテムテーブルの存在を確認する。OK → 200、失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let checks = HashMap::from([(
        "dynamodb".to_string(),
        check_store(state.repository.as_ref()).await,
    )]);
    let response = ReadinessResponse::from_checks(checks);

    let http_status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(response))
}

/// アイテムストアへの接続を確認する（タイムアウト: 5 秒）
async fn check_store(repository: &dyn ItemRepository) -> CheckStatus {
    match tokio::time::timeout(CHECK_TIMEOUT, repository.check_connection()).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: item store check failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: item store check timed out");
            CheckStatus::Error
        }
    }
}
