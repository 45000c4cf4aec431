//! # Canonical Log Line ミドルウェア
//!
//! HTTP リクエスト完了時に、メソッド・パス・ステータス・レイテンシを
//! 1 行に集約したサマリログを出力する tower Layer。
//!
//! `TraceLayer` のスパン内に配置すると、スパンの `request_id` が
//! JSON ログに自動的に含まれる。
//!
//! ```text
//! SetRequestIdLayer → TraceLayer → CanonicalLogLineLayer → handler
//! ```

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response};
use tower::{Layer, Service};

/// `/health` と `/health/ready` は出力対象外
fn is_health_check_path(path: &str) -> bool {
    path.starts_with("/health")
}

/// Canonical Log Line を出力する Layer
///
/// 完了時に INFO レベルで `log.type = "canonical"` マーカー付きの
/// サマリログを出力する。内側の Service がエラーを返した場合は ERROR。
#[derive(Clone, Debug)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService { inner }
    }
}

/// [`CanonicalLogLineLayer`] が生成する Service
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // poll_ready 済みの inner を使う
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let path = req.uri().path().to_owned();
        if is_health_check_path(&path) {
            return Box::pin(async move { inner.call(req).await });
        }

        let method = req.method().to_string();
        let start = Instant::now();

        Box::pin(async move {
            let result = inner.call(req).await;
            let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            match &result {
                Ok(response) => {
                    tracing::info!(
                        log.r#type = "canonical",
                        http.method = %method,
                        http.path = %path,
                        http.status_code = response.status().as_u16(),
                        http.latency_ms = latency_ms,
                        "request completed"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        log.r#type = "canonical",
                        http.method = %method,
                        http.path = %path,
                        http.latency_ms = latency_ms,
                        error.message = %err,
                        "request failed"
                    );
                }
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        convert::Infallible,
        sync::{Arc, Mutex},
    };

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    #[derive(Clone)]
    struct StatusService {
        status: http::StatusCode,
    }

    impl Service<Request<()>> for StatusService {
        type Error = Infallible;
        type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
        type Response = Response<()>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _req: Request<()>) -> Self::Future {
            let status = self.status;
            Box::pin(async move { Ok(Response::builder().status(status).body(()).unwrap()) })
        }
    }

    #[derive(Clone)]
    struct FailingService;

    impl Service<Request<()>> for FailingService {
        type Error = String;
        type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
        type Response = Response<()>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _req: Request<()>) -> Self::Future {
            Box::pin(async { Err("store unavailable".to_string()) })
        }
    }

    #[derive(Debug, Clone)]
    struct CapturedEvent {
        level:   tracing::Level,
        message: String,
        fields:  Vec<(String, String)>,
    }

    impl CapturedEvent {
        fn field(&self, name: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }
    }

    #[derive(Clone)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);

            self.events.lock().unwrap().push(CapturedEvent {
                level:   *event.metadata().level(),
                message: visitor.message.unwrap_or_default(),
                fields:  visitor.fields,
            });
        }
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        fields:  Vec<(String, String)>,
    }

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            let value = format!("{value:?}");
            if field.name() == "message" {
                self.message = Some(value);
            } else {
                self.fields.push((field.name().to_string(), value));
            }
        }

        fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }

        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "message" {
                self.message = Some(value.to_string());
            } else {
                self.fields
                    .push((field.name().to_string(), value.to_string()));
            }
        }
    }

    /// 返り値の `DefaultGuard` はスコープに保持すること
    fn setup_capture() -> (
        tracing::subscriber::DefaultGuard,
        Arc<Mutex<Vec<CapturedEvent>>>,
    ) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            events: events.clone(),
        });
        let guard = tracing::subscriber::set_default(subscriber);
        (guard, events)
    }

    fn build_request(method: &str, path: &str) -> Request<()> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(())
            .unwrap()
    }

    #[test]
    fn test_is_health_check_pathでヘルスチェックのみ除外する() {
        assert!(is_health_check_path("/health"));
        assert!(is_health_check_path("/health/ready"));
        assert!(!is_health_check_path("/items"));
        assert!(!is_health_check_path("/items/health"));
    }

    #[tokio::test]
    async fn test_正常リクエストでinfoレベルのサマリが1行出力される() {
        let (_guard, events) = setup_capture();
        let mut sut = CanonicalLogLineLayer.layer(StatusService {
            status: http::StatusCode::CREATED,
        });

        let response = sut.call(build_request("POST", "/items")).await.unwrap();
        assert_eq!(response.status(), http::StatusCode::CREATED);

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let event = &captured[0];
        assert_eq!(event.level, tracing::Level::INFO);
        assert_eq!(event.message, "request completed");
        assert_eq!(event.field("log.type"), Some("canonical"));
        assert_eq!(event.field("http.method"), Some("POST"));
        assert_eq!(event.field("http.path"), Some("/items"));
        assert_eq!(event.field("http.status_code"), Some("201"));
        assert!(event.field("http.latency_ms").is_some());
    }

    #[tokio::test]
    async fn test_エラーステータスもそのまま返される() {
        let (_guard, events) = setup_capture();
        let mut sut = CanonicalLogLineLayer.layer(StatusService {
            status: http::StatusCode::NOT_FOUND,
        });

        let response = sut.call(build_request("GET", "/items/1")).await.unwrap();

        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(
            events.lock().unwrap()[0].field("http.status_code"),
            Some("404")
        );
    }

    #[tokio::test]
    async fn test_ヘルスチェックではサマリが出力されない() {
        let (_guard, events) = setup_capture();
        let mut sut = CanonicalLogLineLayer.layer(StatusService {
            status: http::StatusCode::OK,
        });

        sut.call(build_request("GET", "/health")).await.unwrap();
        sut.call(build_request("GET", "/health/ready")).await.unwrap();

        assert!(events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_serviceエラー時にerrorレベルで出力される() {
        let (_guard, events) = setup_capture();
        let mut sut = CanonicalLogLineLayer.layer(FailingService);

        let result = sut.call(build_request("DELETE", "/items/1")).await;
        assert!(result.is_err());

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].level, tracing::Level::ERROR);
        assert_eq!(captured[0].message, "request failed");
        assert_eq!(captured[0].field("error.message"), Some("store unavailable"));
    }
}
