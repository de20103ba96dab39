use serde::{Deserialize, Serialize};

const SHARE_TOLERANCE: f64 = 1e-6;

/// Rubric configuration holding every tunable scoring constant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthWeights {
    pub dimensions: DimensionWeights,
    pub inventory: InventoryWeights,
    pub reliability: ReliabilityWeights,
    pub activity: ActivityWeights,
    pub diversity: DiversityWeights,
}

/// Maximum points per dimension. Must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionWeights {
    pub completeness: u8,
    pub inventory: u8,
    pub reliability: u8,
    pub activity: u8,
    pub diversity: u8,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            completeness: 25,
            inventory: 20,
            reliability: 20,
            activity: 15,
            diversity: 20,
        }
    }
}

impl DimensionWeights {
    pub fn total(&self) -> u32 {
        [
            self.completeness,
            self.inventory,
            self.reliability,
            self.activity,
            self.diversity,
        ]
        .iter()
        .map(|weight| u32::from(*weight))
        .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryWeights {
    pub in_stock: f64,
    pub low_stock: f64,
}

impl Default for InventoryWeights {
    fn default() -> Self {
        Self {
            in_stock: 0.7,
            low_stock: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityWeights {
    pub delivered: f64,
    pub cancelled: f64,
    pub stale: f64,
    /// Share of the dimension awarded to shops without any orders.
    pub neutral_baseline: f64,
}

impl Default for ReliabilityWeights {
    fn default() -> Self {
        Self {
            delivered: 0.6,
            cancelled: 0.2,
            stale: 0.2,
            neutral_baseline: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityWeights {
    pub recent_products_target: u32,
    pub recent_orders_target: u32,
    pub product_share: f64,
    pub order_share: f64,
}

impl Default for ActivityWeights {
    fn default() -> Self {
        Self {
            recent_products_target: 3,
            recent_orders_target: 5,
            product_share: 0.5,
            order_share: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityWeights {
    pub active_products_target: u32,
    pub category_target: u32,
    pub product_share: f64,
    pub category_share: f64,
}

impl Default for DiversityWeights {
    fn default() -> Self {
        Self {
            active_products_target: 10,
            category_target: 3,
            product_share: 0.5,
            category_share: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightsError {
    #[error("dimension weights must sum to 100, got {0}")]
    DimensionTotal(u32),
    #[error("{group} shares must sum to 1.0, got {total:.4}")]
    ShareTotal { group: &'static str, total: f64 },
    #[error("{field} must be within [0, 1], got {value}")]
    ShareOutOfRange { field: &'static str, value: f64 },
    #[error("{0} target must be greater than zero")]
    ZeroTarget(&'static str),
}

impl HealthWeights {
    pub fn validate(&self) -> Result<(), WeightsError> {
        let total = self.dimensions.total();
        if total != 100 {
            return Err(WeightsError::DimensionTotal(total));
        }

        let shares = [
            ("inventory.in_stock", self.inventory.in_stock),
            ("inventory.low_stock", self.inventory.low_stock),
            ("reliability.delivered", self.reliability.delivered),
            ("reliability.cancelled", self.reliability.cancelled),
            ("reliability.stale", self.reliability.stale),
            (
                "reliability.neutral_baseline",
                self.reliability.neutral_baseline,
            ),
            ("activity.product_share", self.activity.product_share),
            ("activity.order_share", self.activity.order_share),
            ("diversity.product_share", self.diversity.product_share),
            ("diversity.category_share", self.diversity.category_share),
        ];
        for (field, value) in shares {
            if !(0.0..=1.0).contains(&value) {
                return Err(WeightsError::ShareOutOfRange { field, value });
            }
        }

        let groups = [
            (
                "inventory",
                self.inventory.in_stock + self.inventory.low_stock,
            ),
            (
                "reliability",
                self.reliability.delivered + self.reliability.cancelled + self.reliability.stale,
            ),
            (
                "activity",
                self.activity.product_share + self.activity.order_share,
            ),
            (
                "diversity",
                self.diversity.product_share + self.diversity.category_share,
            ),
        ];
        for (group, total) in groups {
            if (total - 1.0).abs() > SHARE_TOLERANCE {
                return Err(WeightsError::ShareTotal { group, total });
            }
        }

        let targets = [
            ("activity.recent_products", self.activity.recent_products_target),
            ("activity.recent_orders", self.activity.recent_orders_target),
            (
                "diversity.active_products",
                self.diversity.active_products_target,
            ),
            ("diversity.category", self.diversity.category_target),
        ];
        for (name, target) in targets {
            if target == 0 {
                return Err(WeightsError::ZeroTarget(name));
            }
        }

        Ok(())
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
