//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use todolist_infra::repository::ItemRepository;
use todolist_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        ItemState,
        ReadinessState,
        handle_item,
        handle_items,
        health_check,
        readiness_check,
    },
    usecase::ItemUseCaseImpl,
};

/// リポジトリを受け取り、ユースケース → State → Router の順に組み立てる
pub fn build_app(repository: Arc<dyn ItemRepository>) -> Router {
    let readiness_state = Arc::new(ReadinessState {
        repository: repository.clone(),
    });
    let item_state = Arc::new(ItemState {
        usecase: Arc::new(ItemUseCaseImpl::new(repository)),
    });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        // GET / POST / PUT / DELETE 以外もハンドラに届け、400 を返す
        .route("/items", any(handle_items))
        .route("/items/", any(handle_items))
        .route("/items/{id}", any(handle_item))
        .with_state(item_state)
        // 下に書いたものが外側
        // 1. SetRequestIdLayer: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: request_id を含むスパンを作成
        // 3. CanonicalLogLineLayer: 完了時に 1 行サマリを出力
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
