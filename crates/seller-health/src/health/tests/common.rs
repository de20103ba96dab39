use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::health::domain::{SellerRawMetrics, ShopId};
use crate::health::source::{MetricsSourceError, SellerMetricsSource};
use crate::health::window::MetricsWindow;
use crate::health::{SellerHealthEngine, SellerHealthService};

pub(super) fn perfect_shop() -> SellerRawMetrics {
    SellerRawMetrics {
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
    }
}

pub(super) fn stale_orders_shop() -> SellerRawMetrics {
    SellerRawMetrics {
        total_orders: 10,
        delivered_orders: 5,
        cancelled_orders: 1,
        stale_pending_orders: 4,
        ..perfect_shop()
    }
}

pub(super) fn missing_images_shop() -> SellerRawMetrics {
    SellerRawMetrics {
        total_products: 4,
        products_with_images: 1,
        products_with_description: 4,
        products_with_price: 4,
        products_with_stock: 4,
        active_products: 4,
        ..perfect_shop()
    }
}

/// Matches every checklist rule except the ones that exclude each other.
pub(super) fn struggling_shop() -> SellerRawMetrics {
    SellerRawMetrics {
        total_products: 8,
        products_with_images: 2,
        products_with_description: 3,
        products_with_price: 8,
        products_with_stock: 5,
        total_variants: 10,
        variants_in_stock: 5,
        variants_low_stock: 4,
        total_orders: 10,
        delivered_orders: 4,
        cancelled_orders: 3,
        stale_pending_orders: 2,
        recent_products_added: 0,
        recent_orders_received: 1,
        active_products: 8,
        category_count: 1,
    }
}

#[derive(Default)]
pub(super) struct MemoryMetrics {
    shops: Mutex<HashMap<ShopId, SellerRawMetrics>>,
    windows: Mutex<Vec<MetricsWindow>>,
}

impl MemoryMetrics {
    pub(super) fn with_shop(shop_id: &str, metrics: SellerRawMetrics) -> Self {
        let source = Self::default();
        source
            .shops
            .lock()
            .expect("metrics mutex poisoned")
            .insert(ShopId(shop_id.to_string()), metrics);
        source
    }

    pub(super) fn windows(&self) -> Vec<MetricsWindow> {
        self.windows.lock().expect("window mutex poisoned").clone()
    }
}

impl SellerMetricsSource for MemoryMetrics {
    fn fetch(
        &self,
        shop_id: &ShopId,
        window: &MetricsWindow,
    ) -> Result<Option<SellerRawMetrics>, MetricsSourceError> {
        self.windows
            .lock()
            .expect("window mutex poisoned")
            .push(*window);
        Ok(self
            .shops
            .lock()
            .expect("metrics mutex poisoned")
            .get(shop_id)
            .copied())
    }
}

pub(super) struct OfflineMetrics;

impl SellerMetricsSource for OfflineMetrics {
    fn fetch(
        &self,
        _shop_id: &ShopId,
        _window: &MetricsWindow,
    ) -> Result<Option<SellerRawMetrics>, MetricsSourceError> {
        Err(MetricsSourceError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn service_with<S: SellerMetricsSource + 'static>(
    source: S,
) -> Arc<SellerHealthService<S>> {
    Arc::new(SellerHealthService::new(
        Arc::new(source),
        SellerHealthEngine::default(),
    ))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
