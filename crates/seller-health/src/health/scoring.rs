use super::domain::{SellerHealthBreakdown, SellerRawMetrics};
use super::weights::HealthWeights;

/// Upper bound for the summed score.
pub const MAX_SCORE: u8 = 100;

/// Share of `numerator` over `denominator`, capped at 1.
///
/// A zero denominator yields 0. Over-counts are capped instead of rejected.
pub fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    (f64::from(numerator) / f64::from(denominator)).min(1.0)
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Scales a [0, 1] fraction to `weight` points, rounding half up.
fn points(fraction: f64, weight: u8) -> u8 {
    let max = f64::from(weight);
    // Inputs are non-negative, so `round` is round-half-up here.
    clamp((fraction * max).round(), 0.0, max) as u8
}

pub fn score_completeness(metrics: &SellerRawMetrics, weights: &HealthWeights) -> u8 {
    let total = metrics.total_products;
    if total == 0 {
        return 0;
    }

    let rates = [
        ratio(metrics.products_with_images, total),
        ratio(metrics.products_with_description, total),
        ratio(metrics.products_with_price, total),
        ratio(metrics.products_with_stock, total),
    ];
    let average = rates.iter().sum::<f64>() / rates.len() as f64;

    points(average, weights.dimensions.completeness)
}

pub fn score_inventory(metrics: &SellerRawMetrics, weights: &HealthWeights) -> u8 {
    if metrics.total_variants == 0 {
        return 0;
    }

    let in_stock_rate = ratio(metrics.variants_in_stock, metrics.total_variants);
    let low_stock_penalty = if metrics.variants_in_stock > 0 {
        ratio(metrics.variants_low_stock, metrics.variants_in_stock)
    } else {
        0.0
    };

    let shares = &weights.inventory;
    let weighted = in_stock_rate * shares.in_stock + (1.0 - low_stock_penalty) * shares.low_stock;

    points(weighted, weights.dimensions.inventory)
}

pub fn score_reliability(metrics: &SellerRawMetrics, weights: &HealthWeights) -> u8 {
    let shares = &weights.reliability;
    let total = metrics.total_orders;
    if total == 0 {
        // No order history: neither rewarded nor penalized.
        return points(shares.neutral_baseline, weights.dimensions.reliability);
    }

    let delivery_rate = ratio(metrics.delivered_orders, total);
    let cancel_rate = 1.0 - ratio(metrics.cancelled_orders, total);
    let stale_rate = 1.0 - ratio(metrics.stale_pending_orders, total);

    let weighted =
        delivery_rate * shares.delivered + cancel_rate * shares.cancelled + stale_rate * shares.stale;

    points(weighted, weights.dimensions.reliability)
}

pub fn score_activity(metrics: &SellerRawMetrics, weights: &HealthWeights) -> u8 {
    let shares = &weights.activity;
    let product_activity = ratio(metrics.recent_products_added, shares.recent_products_target);
    let order_activity = ratio(metrics.recent_orders_received, shares.recent_orders_target);

    let weighted = product_activity * shares.product_share + order_activity * shares.order_share;

    points(weighted, weights.dimensions.activity)
}

pub fn score_diversity(metrics: &SellerRawMetrics, weights: &HealthWeights) -> u8 {
    let shares = &weights.diversity;
    let product_score = ratio(metrics.active_products, shares.active_products_target);
    let category_score = ratio(metrics.category_count, shares.category_target);

    let weighted = product_score * shares.product_share + category_score * shares.category_share;

    points(weighted, weights.dimensions.diversity)
}

pub fn score_dimensions(metrics: &SellerRawMetrics, weights: &HealthWeights) -> SellerHealthBreakdown {
    SellerHealthBreakdown {
        completeness: score_completeness(metrics, weights),
        inventory: score_inventory(metrics, weights),
        reliability: score_reliability(metrics, weights),
        activity: score_activity(metrics, weights),
        diversity: score_diversity(metrics, weights),
    }
}

/// Sums the breakdown into the overall score.
///
/// Per-dimension rounding means this can differ slightly from rounding the
/// unrounded weighted total; that difference is expected.
pub fn total_score(breakdown: &SellerHealthBreakdown) -> u8 {
    breakdown.total().min(u32::from(MAX_SCORE)) as u8
}
