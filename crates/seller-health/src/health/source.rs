use super::domain::{SellerRawMetrics, ShopId};
use super::window::MetricsWindow;

/// Upstream data-access boundary that gathers the raw counts for a shop.
///
/// Implementations count "recent" and "stale pending" records using the
/// supplied window. `Ok(None)` means the shop is unknown.
pub trait SellerMetricsSource: Send + Sync {
    fn fetch(
        &self,
        shop_id: &ShopId,
        window: &MetricsWindow,
    ) -> Result<Option<SellerRawMetrics>, MetricsSourceError>;
}

/// Error enumeration for metrics source failures.
#[derive(Debug, thiserror::Error)]
pub enum MetricsSourceError {
    #[error("metrics source unavailable: {0}")]
    Unavailable(String),
}
