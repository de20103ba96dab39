use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{SellerHealthResult, ShopId};
use super::engine::SellerHealthEngine;
use super::source::{MetricsSourceError, SellerMetricsSource};
use super::window::MetricsWindow;

/// Health result for one shop, stamped with the window it was computed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerHealthReport {
    pub shop_id: ShopId,
    pub evaluated_at: DateTime<Utc>,
    pub window: MetricsWindow,
    pub health: SellerHealthResult,
}

/// Service composing a metrics source with the scoring engine.
pub struct SellerHealthService<S> {
    source: Arc<S>,
    engine: Arc<SellerHealthEngine>,
}

impl<S> SellerHealthService<S>
where
    S: SellerMetricsSource + 'static,
{
    pub fn new(source: Arc<S>, engine: SellerHealthEngine) -> Self {
        Self {
            source,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &SellerHealthEngine {
        &self.engine
    }

    /// Gather metrics for `shop_id` as of `now` and score them.
    pub fn evaluate(
        &self,
        shop_id: &ShopId,
        now: DateTime<Utc>,
    ) -> Result<SellerHealthReport, SellerHealthServiceError> {
        let window = MetricsWindow::ending_at(now);
        let metrics = self
            .source
            .fetch(shop_id, &window)
            .map_err(|err| {
                warn!(shop_id = %shop_id, error = %err, "seller metrics unavailable");
                err
            })?
            .ok_or_else(|| SellerHealthServiceError::NotFound(shop_id.clone()))?;

        let health = self.engine.evaluate(&metrics);
        debug!(
            shop_id = %shop_id,
            score = health.score,
            suggestions = health.suggestions.len(),
            "seller health evaluated"
        );

        Ok(SellerHealthReport {
            shop_id: shop_id.clone(),
            evaluated_at: now,
            window,
            health,
        })
    }
}

/// Error raised by the seller health service.
#[derive(Debug, thiserror::Error)]
pub enum SellerHealthServiceError {
    #[error("shop {0} not found")]
    NotFound(ShopId),
    #[error(transparent)]
    Source(#[from] MetricsSourceError),
}
