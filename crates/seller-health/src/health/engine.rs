use super::domain::{SellerHealthBreakdown, SellerHealthResult, SellerRawMetrics, Suggestion};
use super::scoring::{score_dimensions, total_score};
use super::suggestions::generate_suggestions;
use super::weights::HealthWeights;

/// Stateless evaluator that applies the weights table to a metrics snapshot.
#[derive(Debug, Clone, Default)]
pub struct SellerHealthEngine {
    weights: HealthWeights,
}

impl SellerHealthEngine {
    pub fn new(weights: HealthWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &HealthWeights {
        &self.weights
    }

    pub fn breakdown(&self, metrics: &SellerRawMetrics) -> SellerHealthBreakdown {
        score_dimensions(metrics, &self.weights)
    }

    pub fn suggestions(
        &self,
        metrics: &SellerRawMetrics,
        breakdown: &SellerHealthBreakdown,
    ) -> Vec<Suggestion> {
        generate_suggestions(metrics, breakdown)
    }

    pub fn evaluate(&self, metrics: &SellerRawMetrics) -> SellerHealthResult {
        let breakdown = self.breakdown(metrics);
        let score = total_score(&breakdown);
        let suggestions = self.suggestions(metrics, &breakdown);

        SellerHealthResult {
            score,
            breakdown,
            suggestions,
        }
    }
}

/// Score `metrics` with the default weights.
pub fn compute_seller_health(metrics: &SellerRawMetrics) -> SellerHealthResult {
    SellerHealthEngine::default().evaluate(metrics)
}
