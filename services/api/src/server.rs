use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryMetricsSource};
use crate::routes::with_health_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use seller_health::config::AppConfig;
use seller_health::error::AppError;
use seller_health::health::{SellerHealthEngine, SellerHealthService};
use seller_health::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = Arc::new(InMemoryMetricsSource::with_demo_shops());
    let engine = SellerHealthEngine::new(config.weights.clone());
    let service = Arc::new(SellerHealthService::new(source, engine));

    let app = with_health_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "seller health service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
