use super::common::*;
use crate::health::domain::{HealthDimension, SellerHealthBreakdown, SellerRawMetrics};
use crate::health::scoring::{
    clamp, ratio, score_activity, score_completeness, score_dimensions, score_diversity,
    score_inventory, score_reliability, total_score,
};
use crate::health::weights::{HealthWeights, WeightsError};
use crate::health::{compute_seller_health, SellerHealthEngine};

fn weights() -> HealthWeights {
    HealthWeights::default()
}

#[test]
fn ratio_guards_zero_denominator_and_caps_overcounts() {
    assert_eq!(ratio(5, 0), 0.0);
    assert_eq!(ratio(0, 0), 0.0);
    assert_eq!(ratio(1, 4), 0.25);
    assert_eq!(ratio(12, 4), 1.0);
}

#[test]
fn clamp_saturates_at_both_ends() {
    assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
    assert_eq!(clamp(1.7, 0.0, 1.0), 1.0);
    assert_eq!(clamp(0.4, 0.0, 1.0), 0.4);
}

#[test]
fn zero_metrics_score_only_the_neutral_reliability_baseline() {
    let breakdown = score_dimensions(&SellerRawMetrics::default(), &weights());

    assert_eq!(
        breakdown,
        SellerHealthBreakdown {
            completeness: 0,
            inventory: 0,
            reliability: 10,
            activity: 0,
            diversity: 0,
        }
    );
    assert_eq!(total_score(&breakdown), 10);
}

#[test]
fn perfect_shop_reaches_every_dimension_maximum() {
    let breakdown = score_dimensions(&perfect_shop(), &weights());

    assert_eq!(
        breakdown,
        SellerHealthBreakdown {
            completeness: 25,
            inventory: 20,
            reliability: 20,
            activity: 15,
            diversity: 20,
        }
    );
    assert_eq!(total_score(&breakdown), 100);
}

#[test]
fn completeness_averages_the_four_rates() {
    let expected = (((1.0 / 4.0) + 1.0 + 1.0 + 1.0) / 4.0 * 25.0_f64).round() as u8;

    assert_eq!(score_completeness(&missing_images_shop(), &weights()), expected);
    assert_eq!(expected, 20);
}

#[test]
fn completeness_caps_overcounted_inputs() {
    let metrics = SellerRawMetrics {
        products_with_images: 50,
        ..perfect_shop()
    };

    assert_eq!(score_completeness(&metrics, &weights()), 25);
}

#[test]
fn inventory_blends_in_stock_rate_and_low_stock_penalty() {
    let metrics = SellerRawMetrics {
        total_variants: 10,
        variants_in_stock: 5,
        variants_low_stock: 4,
        ..perfect_shop()
    };

    // 0.5 * 0.7 + (1 - 0.8) * 0.3 = 0.41 -> 8.2 points
    assert_eq!(score_inventory(&metrics, &weights()), 8);
}

#[test]
fn inventory_without_stocked_variants_keeps_the_low_stock_share() {
    let metrics = SellerRawMetrics {
        total_variants: 4,
        variants_in_stock: 0,
        variants_low_stock: 0,
        ..perfect_shop()
    };

    assert_eq!(score_inventory(&metrics, &weights()), 6);
}

#[test]
fn stale_orders_pull_reliability_below_maximum() {
    let score = score_reliability(&stale_orders_shop(), &weights());

    // 0.5 * 0.6 + 0.9 * 0.2 + 0.6 * 0.2 = 0.6 -> 12 points
    assert_eq!(score, 12);
    assert!(score < score_reliability(&perfect_shop(), &weights()));
}

#[test]
fn reliability_never_drops_as_deliveries_rise() {
    let mut previous = 0;
    for delivered in 0..=20 {
        let metrics = SellerRawMetrics {
            delivered_orders: delivered,
            ..perfect_shop()
        };
        let score = score_reliability(&metrics, &weights());
        assert!(
            score >= previous,
            "delivered={delivered} dropped from {previous} to {score}"
        );
        previous = score;
    }
}

#[test]
fn reliability_never_rises_as_cancellations_rise() {
    let mut previous = u8::MAX;
    for cancelled in 0..=10 {
        let metrics = SellerRawMetrics {
            delivered_orders: 10,
            cancelled_orders: cancelled,
            ..perfect_shop()
        };
        let score = score_reliability(&metrics, &weights());
        assert!(
            score <= previous,
            "cancelled={cancelled} rose from {previous} to {score}"
        );
        previous = score;
    }
}

#[test]
fn activity_rounds_half_up() {
    let metrics = SellerRawMetrics {
        recent_products_added: 3,
        recent_orders_received: 0,
        ..perfect_shop()
    };

    // 0.5 * 15 = 7.5
    assert_eq!(score_activity(&metrics, &weights()), 8);
}

#[test]
fn activity_caps_busy_windows() {
    let metrics = SellerRawMetrics {
        recent_products_added: 40,
        recent_orders_received: 400,
        ..perfect_shop()
    };

    assert_eq!(score_activity(&metrics, &weights()), 15);
}

#[test]
fn diversity_rewards_catalog_size_and_categories() {
    let metrics = SellerRawMetrics {
        active_products: 5,
        category_count: 1,
        ..perfect_shop()
    };

    // 0.5 * 0.5 + (1/3) * 0.5 = 0.4167 -> 8.33 points
    assert_eq!(score_diversity(&metrics, &weights()), 8);
}

#[test]
fn every_dimension_stays_within_its_weight() {
    let samples = [
        SellerRawMetrics::default(),
        perfect_shop(),
        stale_orders_shop(),
        missing_images_shop(),
        struggling_shop(),
        SellerRawMetrics {
            total_products: 1,
            products_with_images: u32::MAX,
            products_with_description: u32::MAX,
            products_with_price: u32::MAX,
            products_with_stock: u32::MAX,
            total_variants: 1,
            variants_in_stock: u32::MAX,
            variants_low_stock: u32::MAX,
            total_orders: 1,
            delivered_orders: u32::MAX,
            cancelled_orders: u32::MAX,
            stale_pending_orders: u32::MAX,
            recent_products_added: u32::MAX,
            recent_orders_received: u32::MAX,
            active_products: u32::MAX,
            category_count: u32::MAX,
        },
    ];
    let weights = weights();

    for metrics in samples {
        let result = compute_seller_health(&metrics);
        let breakdown = result.breakdown;
        assert!(breakdown.completeness <= weights.dimensions.completeness);
        assert!(breakdown.inventory <= weights.dimensions.inventory);
        assert!(breakdown.reliability <= weights.dimensions.reliability);
        assert!(breakdown.activity <= weights.dimensions.activity);
        assert!(breakdown.diversity <= weights.dimensions.diversity);
        assert_eq!(u32::from(result.score), breakdown.total());
        assert!(result.score <= 100);
    }
}

#[test]
fn total_score_is_clamped_even_for_out_of_range_breakdowns() {
    let breakdown = SellerHealthBreakdown {
        completeness: 90,
        inventory: 90,
        reliability: 90,
        activity: 90,
        diversity: 90,
    };

    assert_eq!(breakdown.total(), 450);
    assert_eq!(total_score(&breakdown), 100);
}

#[test]
fn breakdown_lookup_follows_dimension_order() {
    let breakdown = score_dimensions(&perfect_shop(), &weights());
    let values: Vec<u8> = HealthDimension::ALL
        .iter()
        .map(|dimension| breakdown.get(*dimension))
        .collect();

    assert_eq!(values, vec![25, 20, 20, 15, 20]);
}

#[test]
fn engine_applies_tuned_weights() {
    let mut tuned = weights();
    tuned.reliability.neutral_baseline = 0.25;
    tuned.dimensions.reliability = 30;
    tuned.dimensions.diversity = 10;
    tuned.validate().expect("tuned weights balance");

    let engine = SellerHealthEngine::new(tuned);
    assert_eq!(engine.weights().reliability.neutral_baseline, 0.25);
    assert_eq!(engine.weights().dimensions.total(), 100);
    let result = engine.evaluate(&SellerRawMetrics::default());

    assert_eq!(result.breakdown.reliability, 8);
    assert_eq!(result.score, 8);
    assert_eq!(engine.breakdown(&perfect_shop()).total(), 100);
}

#[test]
fn default_weights_validate() {
    assert_eq!(weights().validate(), Ok(()));
    assert_eq!(weights().dimensions.total(), 100);
}

#[test]
fn unbalanced_sub_weights_are_rejected() {
    let mut tuned = weights();
    tuned.inventory.in_stock = 0.9;

    match tuned.validate() {
        Err(WeightsError::ShareTotal { group, .. }) => assert_eq!(group, "inventory"),
        other => panic!("expected share total error, got {other:?}"),
    }
}

#[test]
fn zero_targets_are_rejected() {
    let mut tuned = weights();
    tuned.diversity.category_target = 0;

    assert_eq!(
        tuned.validate(),
        Err(WeightsError::ZeroTarget("diversity.category"))
    );
}

#[test]
fn out_of_range_baseline_is_rejected() {
    let mut tuned = weights();
    tuned.reliability.neutral_baseline = 1.5;

    assert!(matches!(
        tuned.validate(),
        Err(WeightsError::ShareOutOfRange {
            field: "reliability.neutral_baseline",
            ..
        })
    ));
}
