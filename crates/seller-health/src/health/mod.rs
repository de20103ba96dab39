//! Seller health scoring: five weighted dimensions summed into a 0-100 score,
//! plus up to three prioritized improvement suggestions.
//!
//! The engine is pure and synchronous. [`compute_seller_health`] is the entry
//! point; [`SellerHealthService`] and [`seller_health_router`] wrap it for
//! callers that gather metrics from a [`SellerMetricsSource`].

pub mod domain;
mod engine;
pub mod router;
pub mod scoring;
mod service;
mod source;
pub mod suggestions;
pub mod weights;
mod window;

#[cfg(test)]
mod tests;

pub use domain::{
    HealthDimension, SellerHealthBreakdown, SellerHealthResult, SellerRawMetrics, ShopId,
    Suggestion,
};
pub use engine::{compute_seller_health, SellerHealthEngine};
pub use router::seller_health_router;
pub use service::{SellerHealthReport, SellerHealthService, SellerHealthServiceError};
pub use source::{MetricsSourceError, SellerMetricsSource};
pub use weights::{HealthWeights, WeightsError};
pub use window::{MetricsWindow, RECENT_ACTIVITY_DAYS, STALE_PENDING_HOURS};
