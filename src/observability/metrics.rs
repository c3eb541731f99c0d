use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::store::AssignmentStore;

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub store_operations_total: IntCounterVec,
    pub orders_total: IntGauge,
    pub partners_total: IntGauge,
    pub assigned_orders_total: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let store_operations_total = IntCounterVec::new(
            Opts::new("store_operations_total", "Store operations by name"),
            &["operation"],
        )
        .expect("valid store_operations_total metric");

        let orders_total = IntGauge::new("orders_total", "Orders currently known")
            .expect("valid orders_total metric");

        let partners_total = IntGauge::new("partners_total", "Partners currently known")
            .expect("valid partners_total metric");

        let assigned_orders_total =
            IntGauge::new("assigned_orders_total", "Orders currently assigned to a partner")
                .expect("valid assigned_orders_total metric");

        registry
            .register(Box::new(store_operations_total.clone()))
            .expect("register store_operations_total");
        registry
            .register(Box::new(orders_total.clone()))
            .expect("register orders_total");
        registry
            .register(Box::new(partners_total.clone()))
            .expect("register partners_total");
        registry
            .register(Box::new(assigned_orders_total.clone()))
            .expect("register assigned_orders_total");

        Self {
            registry,
            store_operations_total,
            orders_total,
            partners_total,
            assigned_orders_total,
        }
    }

    pub fn record_operation(&self, operation: &str) {
        self.store_operations_total
            .with_label_values(&[operation])
            .inc();
    }

    pub fn observe_store(&self, store: &AssignmentStore) {
        self.orders_total.set(store.len_orders() as i64);
        self.partners_total.set(store.len_partners() as i64);
        self.assigned_orders_total.set(store.len_assigned() as i64);
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
