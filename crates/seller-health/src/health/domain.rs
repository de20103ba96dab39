use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the shop whose metrics are being scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShopId(pub String);

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of pre-aggregated seller counts.
///
/// Every field is a plain count supplied by the caller. "Recent" counts cover
/// the trailing activity window and `stale_pending_orders` counts pending
/// orders older than the stale threshold (see [`super::MetricsWindow`]).
/// Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerRawMetrics {
    pub total_products: u32,
    pub products_with_images: u32,
    pub products_with_description: u32,
    pub products_with_price: u32,
    pub products_with_stock: u32,

    pub total_variants: u32,
    /// Variants with stock above zero.
    pub variants_in_stock: u32,
    /// Variants with stock between 1 and 3 inclusive.
    pub variants_low_stock: u32,

    pub total_orders: u32,
    pub delivered_orders: u32,
    pub cancelled_orders: u32,
    pub stale_pending_orders: u32,

    pub recent_products_added: u32,
    pub recent_orders_received: u32,

    pub active_products: u32,
    /// Distinct non-empty categories.
    pub category_count: u32,
}

/// Scored dimensions, in the order they are summed and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthDimension {
    Completeness,
    Inventory,
    Reliability,
    Activity,
    Diversity,
}

impl HealthDimension {
    pub const ALL: [HealthDimension; 5] = [
        HealthDimension::Completeness,
        HealthDimension::Inventory,
        HealthDimension::Reliability,
        HealthDimension::Activity,
        HealthDimension::Diversity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HealthDimension::Completeness => "Catalog completeness",
            HealthDimension::Inventory => "Inventory health",
            HealthDimension::Reliability => "Order reliability",
            HealthDimension::Activity => "Recent activity",
            HealthDimension::Diversity => "Catalog diversity",
        }
    }
}

/// Per-dimension sub-scores, each bounded by its dimension weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SellerHealthBreakdown {
    pub completeness: u8,
    pub inventory: u8,
    pub reliability: u8,
    pub activity: u8,
    pub diversity: u8,
}

impl SellerHealthBreakdown {
    pub fn get(&self, dimension: HealthDimension) -> u8 {
        match dimension {
            HealthDimension::Completeness => self.completeness,
            HealthDimension::Inventory => self.inventory,
            HealthDimension::Reliability => self.reliability,
            HealthDimension::Activity => self.activity,
            HealthDimension::Diversity => self.diversity,
        }
    }

    /// Unclamped sum of the five sub-scores.
    pub fn total(&self) -> u32 {
        HealthDimension::ALL
            .iter()
            .map(|dimension| u32::from(self.get(*dimension)))
            .sum()
    }
}

/// Plain-language improvement tip with a link into the seller dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub href: String,
}

impl Suggestion {
    pub(crate) fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// Overall score, its breakdown, and at most three suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SellerHealthResult {
    pub score: u8,
    pub breakdown: SellerHealthBreakdown,
    pub suggestions: Vec<Suggestion>,
}
