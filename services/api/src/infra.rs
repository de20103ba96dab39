use metrics_exporter_prometheus::PrometheusHandle;
use seller_health::health::{
    MetricsSourceError, MetricsWindow, SellerMetricsSource, SellerRawMetrics, ShopId,
};
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Metrics source backed by precomputed snapshots, keyed by shop.
#[derive(Default, Clone)]
pub(crate) struct InMemoryMetricsSource {
    shops: Arc<RwLock<BTreeMap<ShopId, SellerRawMetrics>>>,
}

impl InMemoryMetricsSource {
    pub(crate) fn with_demo_shops() -> Self {
        let source = Self::default();
        for (shop_id, metrics) in demo_shops() {
            source.upsert(shop_id, metrics);
        }
        source
    }

    pub(crate) fn upsert(&self, shop_id: ShopId, metrics: SellerRawMetrics) {
        self.shops
            .write()
            .expect("metrics lock poisoned")
            .insert(shop_id, metrics);
    }

    pub(crate) fn shop_ids(&self) -> Vec<ShopId> {
        self.shops
            .read()
            .expect("metrics lock poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

impl SellerMetricsSource for InMemoryMetricsSource {
    fn fetch(
        &self,
        shop_id: &ShopId,
        _window: &MetricsWindow,
    ) -> Result<Option<SellerRawMetrics>, MetricsSourceError> {
        let guard = self
            .shops
            .read()
            .map_err(|_| MetricsSourceError::Unavailable("metrics lock poisoned".to_string()))?;
        Ok(guard.get(shop_id).copied())
    }
}

/// Sample shops covering the common health profiles.
pub(crate) fn demo_shops() -> Vec<(ShopId, SellerRawMetrics)> {
    let perfect = SellerRawMetrics {
        total_products: 10,
        products_with_images: 10,
        products_with_description: 10,
        products_with_price: 10,
        products_with_stock: 10,
        total_variants: 20,
        variants_in_stock: 20,
        variants_low_stock: 0,
        total_orders: 20,
        delivered_orders: 20,
        cancelled_orders: 0,
        stale_pending_orders: 0,
        recent_products_added: 3,
        recent_orders_received: 5,
        active_products: 10,
        category_count: 3,
    };

    vec![
        (ShopId("demo-perfect".to_string()), perfect),
        (ShopId("demo-empty".to_string()), SellerRawMetrics::default()),
        (
            ShopId("demo-stale-orders".to_string()),
            SellerRawMetrics {
                total_orders: 10,
                delivered_orders: 5,
                cancelled_orders: 1,
                stale_pending_orders: 4,
                ..perfect
            },
        ),
        (
            ShopId("demo-missing-images".to_string()),
            SellerRawMetrics {
                total_products: 4,
                products_with_images: 1,
                products_with_description: 4,
                products_with_price: 4,
                products_with_stock: 4,
                active_products: 4,
                ..perfect
            },
        ),
    ]
}
