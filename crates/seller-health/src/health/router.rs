use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::json;

use super::domain::{SellerRawMetrics, ShopId};
use super::service::{SellerHealthService, SellerHealthServiceError};
use super::source::SellerMetricsSource;

/// Router builder exposing the scoring endpoints.
pub fn seller_health_router<S>(service: Arc<SellerHealthService<S>>) -> Router
where
    S: SellerMetricsSource + 'static,
{
    Router::new()
        .route("/api/v1/seller-health/score", post(score_handler::<S>))
        .route("/api/v1/shops/:shop_id/health", get(shop_health_handler::<S>))
        .with_state(service)
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<SellerHealthService<S>>>,
    axum::Json(metrics): axum::Json<SellerRawMetrics>,
) -> Response
where
    S: SellerMetricsSource + 'static,
{
    let result = service.engine().evaluate(&metrics);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn shop_health_handler<S>(
    State(service): State<Arc<SellerHealthService<S>>>,
    Path(shop_id): Path<String>,
) -> Response
where
    S: SellerMetricsSource + 'static,
{
    let shop_id = ShopId(shop_id);
    match service.evaluate(&shop_id, Utc::now()) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(SellerHealthServiceError::NotFound(_)) => {
            let payload = json!({
                "shop_id": shop_id.0,
                "error": "shop not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other @ SellerHealthServiceError::Source(_)) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
