use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use backend_domain::ports::PromotionStore;
use backend_domain::{LocationCatalog, RuntimeConfig};
use tokio::sync::Mutex;

use crate::ops::AuditLogWriter;
use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub catalog: Arc<LocationCatalog>,
    pub store: Arc<dyn PromotionStore>,
    /// One mutex per catalog location; the catalog is immutable, so the lock
    /// set is fixed for the process lifetime.
    pub location_locks: Arc<HashMap<String, Mutex<()>>>,
    pub audit_log: Arc<AuditLogWriter>,
    pub metrics: Arc<Metrics>,
    attempt_ids: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        catalog: Arc<LocationCatalog>,
        store: Arc<dyn PromotionStore>,
        next_attempt_id: u64,
    ) -> Self {
        let location_locks = catalog
            .ids()
            .map(|id| (id.to_string(), Mutex::new(())))
            .collect::<HashMap<_, _>>();
        let audit_log = AuditLogWriter::new(store.clone(), config.log_retention);

        Self {
            config,
            catalog,
            store,
            location_locks: Arc::new(location_locks),
            audit_log: Arc::new(audit_log),
            metrics: Arc::new(Metrics::default()),
            attempt_ids: Arc::new(AtomicU64::new(next_attempt_id)),
        }
    }

    pub fn next_attempt_id(&self) -> u64 {
        self.attempt_ids.fetch_add(1, Ordering::Relaxed)
    }
}
