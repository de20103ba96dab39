use super::domain::{SellerHealthBreakdown, SellerRawMetrics, Suggestion};
use super::window::{RECENT_ACTIVITY_DAYS, STALE_PENDING_HOURS};

/// Maximum number of suggestions returned to the seller.
pub const MAX_SUGGESTIONS: usize = 3;

const LOW_STOCK_UNITS: u32 = 3;
const SMALL_CATALOG_PRODUCTS: u32 = 10;
const SINGLE_CATEGORY_MIN_PRODUCTS: u32 = 5;
const CANCELLATION_MIN_ORDERS: u32 = 5;

/// Identifies which checklist rule produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    MissingImages,
    StalePendingOrders,
    ProductsOutOfStock,
    VariantsOutOfStock,
    MissingCategories,
    MissingDescriptions,
    LowStockVariants,
    HighCancellationRate,
    NoRecentProductsSmallCatalog,
    NoRecentProducts,
    SingleCategory,
}

/// A matched rule before ranking. Lower priority values are shown first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSuggestion {
    pub kind: SuggestionKind,
    pub priority: u8,
    pub suggestion: Suggestion,
}

struct SuggestionRule {
    kind: SuggestionKind,
    priority: u8,
    applies: fn(&SellerRawMetrics) -> bool,
    render: fn(&SellerRawMetrics) -> Suggestion,
}

/// Checklist evaluated in order; ties on priority keep this order.
const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        kind: SuggestionKind::MissingImages,
        priority: 1,
        applies: |m| missing_images(m) > 0,
        render: |m| {
            let count = missing_images(m);
            Suggestion::new(
                format!(
                    "Add photos to {count} {}. Listings with images get far more views.",
                    plural(count, "product", "products")
                ),
                "/dashboard/products?filter=missing-images",
            )
        },
    },
    SuggestionRule {
        kind: SuggestionKind::StalePendingOrders,
        priority: 1,
        applies: |m| m.stale_pending_orders > 0,
        render: |m| {
            let count = m.stale_pending_orders;
            Suggestion::new(
                format!(
                    "You have {count} pending order(s) older than {STALE_PENDING_HOURS} hours. Confirm or ship them to keep buyers informed."
                ),
                "/dashboard/orders?status=pending",
            )
        },
    },
    SuggestionRule {
        kind: SuggestionKind::ProductsOutOfStock,
        priority: 2,
        applies: |m| {
            let out_of_stock = products_out_of_stock(m);
            out_of_stock > 0 && out_of_stock < m.total_products
        },
        render: |m| {
            let count = products_out_of_stock(m);
            Suggestion::new(
                format!(
                    "{count} {} out of stock. Restock {} so buyers can order.",
                    plural(count, "product is", "products are"),
                    plural(count, "it", "them")
                ),
                "/dashboard/inventory?filter=out-of-stock",
            )
        },
    },
    SuggestionRule {
        kind: SuggestionKind::VariantsOutOfStock,
        priority: 2,
        applies: |m| {
            let total = m.total_variants;
            // Out-of-stock share of at least 40%.
            total > 0 && u64::from(variants_out_of_stock(m)) * 10 >= u64::from(total) * 4
        },
        render: |m| {
            let share = percent(variants_out_of_stock(m), m.total_variants);
            Suggestion::new(
                format!("{share}% of your variants are out of stock. Replenish your best sellers first."),
                "/dashboard/inventory?filter=out-of-stock",
            )
        },
    },
    SuggestionRule {
        kind: SuggestionKind::MissingCategories,
        priority: 3,
        applies: |m| m.category_count == 0 && m.total_products > 0,
        render: |_| {
            Suggestion::new(
                "Assign categories to your products so buyers can browse your shop.",
                "/dashboard/products?filter=uncategorized",
            )
        },
    },
    SuggestionRule {
        kind: SuggestionKind::MissingDescriptions,
        priority: 3,
        applies: |m| missing_descriptions(m) > 0,
        render: |m| {
            let count = missing_descriptions(m);
            Suggestion::new(
                format!(
                    "Write descriptions for {count} {} to help buyers decide.",
                    plural(count, "product", "products")
                ),
                "/dashboard/products?filter=missing-description",
            )
        },
    },
    SuggestionRule {
        kind: SuggestionKind::LowStockVariants,
        priority: 4,
        applies: |m| {
            let in_stock = m.variants_in_stock;
            // Low-stock share above 30% of in-stock variants.
            in_stock > 0 && u64::from(m.variants_low_stock) * 10 > u64::from(in_stock) * 3
        },
        render: |m| {
            let count = m.variants_low_stock;
            Suggestion::new(
                format!(
                    "{count} {} running low ({LOW_STOCK_UNITS} or fewer left). Reorder before {} sell out.",
                    plural(count, "variant is", "variants are"),
                    plural(count, "it", "they")
                ),
                "/dashboard/inventory?filter=low-stock",
            )
        },
    },
    SuggestionRule {
        kind: SuggestionKind::HighCancellationRate,
        priority: 5,
        applies: |m| {
            // Cancellation share above 20%.
            m.total_orders >= CANCELLATION_MIN_ORDERS
                && u64::from(m.cancelled_orders) * 5 > u64::from(m.total_orders)
        },
        render: |m| {
            let share = percent(m.cancelled_orders, m.total_orders);
            Suggestion::new(
                format!(
                    "{share}% of your orders were cancelled. Keep stock counts accurate to avoid cancellations."
                ),
                "/dashboard/orders?status=cancelled",
            )
        },
    },
    SuggestionRule {
        kind: SuggestionKind::NoRecentProductsSmallCatalog,
        priority: 6,
        applies: |m| m.recent_products_added == 0 && m.total_products < SMALL_CATALOG_PRODUCTS,
        render: |_| {
            Suggestion::new(
                format!(
                    "No new products in the last {RECENT_ACTIVITY_DAYS} days. Grow your catalog to at least {SMALL_CATALOG_PRODUCTS} products to attract more buyers."
                ),
                "/dashboard/products/new",
            )
        },
    },
    SuggestionRule {
        kind: SuggestionKind::NoRecentProducts,
        priority: 7,
        applies: |m| m.recent_products_added == 0 && m.total_products >= SMALL_CATALOG_PRODUCTS,
        render: |_| {
            Suggestion::new(
                format!(
                    "No new products in the last {RECENT_ACTIVITY_DAYS} days. Fresh listings keep your shop visible."
                ),
                "/dashboard/products/new",
            )
        },
    },
    SuggestionRule {
        kind: SuggestionKind::SingleCategory,
        priority: 8,
        applies: |m| m.category_count == 1 && m.total_products >= SINGLE_CATEGORY_MIN_PRODUCTS,
        render: |_| {
            Suggestion::new(
                "All your products share one category. Split them into more categories to reach more buyers.",
                "/dashboard/categories",
            )
        },
    },
];

/// Fixed list shown to shops that have not listed anything yet.
pub fn onboarding_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            "Add your first product to start selling.",
            "/dashboard/products/new",
        ),
        Suggestion::new(
            "Upload a photo, set a price, and add stock for every product.",
            "/dashboard/products",
        ),
        Suggestion::new(
            "Organize your products into categories so buyers can find them.",
            "/dashboard/categories",
        ),
    ]
}

pub fn healthy_shop_suggestion() -> Suggestion {
    Suggestion::new(
        "Your shop is in great shape. Keep adding products and shipping orders on time.",
        "/dashboard",
    )
}

/// Every rule matching `metrics`, in checklist order.
pub fn matched_rules(metrics: &SellerRawMetrics) -> Vec<RankedSuggestion> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(metrics))
        .map(|rule| RankedSuggestion {
            kind: rule.kind,
            priority: rule.priority,
            suggestion: (rule.render)(metrics),
        })
        .collect()
}

/// Top suggestions for `metrics`. Never empty.
///
/// The breakdown is accepted so rules can key off dimension scores; the
/// current checklist reads only the raw counts.
pub fn generate_suggestions(
    metrics: &SellerRawMetrics,
    _breakdown: &SellerHealthBreakdown,
) -> Vec<Suggestion> {
    if metrics.total_products == 0 {
        return onboarding_suggestions();
    }

    let mut ranked = matched_rules(metrics);
    if ranked.is_empty() {
        return vec![healthy_shop_suggestion()];
    }

    // `sort_by_key` is stable, so equal priorities keep checklist order.
    ranked.sort_by_key(|entry| entry.priority);
    ranked
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|entry| entry.suggestion)
        .collect()
}

fn missing_images(metrics: &SellerRawMetrics) -> u32 {
    metrics
        .total_products
        .saturating_sub(metrics.products_with_images)
}

fn missing_descriptions(metrics: &SellerRawMetrics) -> u32 {
    metrics
        .total_products
        .saturating_sub(metrics.products_with_description)
}

fn products_out_of_stock(metrics: &SellerRawMetrics) -> u32 {
    metrics
        .total_products
        .saturating_sub(metrics.products_with_stock)
}

fn variants_out_of_stock(metrics: &SellerRawMetrics) -> u32 {
    metrics
        .total_variants
        .saturating_sub(metrics.variants_in_stock)
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}

fn plural(count: u32, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
