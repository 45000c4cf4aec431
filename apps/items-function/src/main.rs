//! # Items Function サーバー
//!
//! ToDoList アイテムの作成・取得・更新・削除を HTTP メソッドで振り分ける
//! サーバーレス風のエンドポイント。
//!
//! ## ライフサイクル
//!
//! 1. 設定読み込み（`.env` があれば先に読み込む）
//! 2. DynamoDB クライアントを作成し、`ToDoList.Items` テーブルを用意（冪等）
//! 3. サーバー起動。SIGINT / SIGTERM で graceful shutdown
//! 4. 全リクエスト完了後にクライアントを破棄
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ITEMS_STORE_ENDPOINT_URI` | **Yes** | DynamoDB エンドポイント URI |
//! | `ITEMS_STORE_PRIMARY_KEY` | **Yes** | `<access_key_id>:<secret_access_key>` |
//! | `ITEMS_STORE_REGION` | No | 署名リージョン（デフォルト: `ap-northeast-1`） |
//! | `ITEMS_FUNCTION_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ITEMS_FUNCTION_PORT` | No | ポート番号（デフォルト: `7071`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! ITEMS_STORE_ENDPOINT_URI=http://localhost:18000 \
//! ITEMS_STORE_PRIMARY_KEY=local:local \
//! cargo run -p todolist-items-function
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todolist_infra::{
    dynamodb::{self, ContainerRef},
    repository::{DynamoDbItemRepository, ItemRepository},
};
use todolist_items_function::{build_app, config::FunctionConfig};
use todolist_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

const SERVICE_NAME: &str = "items-function";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env(SERVICE_NAME));
    let _tracing_guard = tracing::info_span!("app", service = SERVICE_NAME).entered();

    let config = FunctionConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Items Function サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let client = dynamodb::create_client(&config.store.connection()).await;
    let table_name = ContainerRef::items().table_name();
    dynamodb::ensure_items_table(&client, &table_name)
        .await
        .context("アイテムテーブルの準備に失敗しました")?;
    tracing::info!("アイテムストアに接続しました: {}", table_name);

    let repository: Arc<dyn ItemRepository> =
        Arc::new(DynamoDbItemRepository::new(client, table_name));
    let app = build_app(repository);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Items Function サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // ルーターと共に State が破棄され、クライアントもここで解放される
    tracing::info!("Items Function サーバーを停止しました");

    Ok(())
}

/// SIGINT（Ctrl+C）または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Ctrl+C ハンドラの登録に失敗しました: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM ハンドラの登録に失敗しました: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
