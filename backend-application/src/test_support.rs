// Shared helpers for unit tests: an in-memory store and state builders.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::ports::PromotionStore;
use backend_domain::{Location, LocationCatalog, ParticipateRequest, RuntimeConfig, VisitAttempt};

use crate::AppState;

#[derive(Default)]
pub(crate) struct MemoryStore {
    winners: RwLock<HashMap<String, VisitAttempt>>,
    log: RwLock<Vec<VisitAttempt>>,
    fail_log_writes: AtomicBool,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail_log_writes(&self, fail: bool) {
        self.fail_log_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PromotionStore for MemoryStore {
    async fn load_winners(&self) -> anyhow::Result<HashMap<String, VisitAttempt>> {
        Ok(self.winners.read().await.clone())
    }

    async fn save_winners(&self, winners: &HashMap<String, VisitAttempt>) -> anyhow::Result<()> {
        *self.winners.write().await = winners.clone();
        Ok(())
    }

    async fn load_log(&self) -> anyhow::Result<Vec<VisitAttempt>> {
        Ok(self.log.read().await.clone())
    }

    async fn save_log(&self, entries: &[VisitAttempt]) -> anyhow::Result<()> {
        if self.fail_log_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("log write disabled for test"));
        }
        *self.log.write().await = entries.to_vec();
        Ok(())
    }
}

pub(crate) fn test_catalog(ids: &[&str]) -> LocationCatalog {
    let entries = ids
        .iter()
        .map(|id| Location {
            id: id.to_string(),
            name: format!("Location {}", id),
            prize: format!("Prize for {}", id),
            emoji: "📍".to_string(),
        })
        .collect();
    LocationCatalog::from_entries(entries).expect("test catalog")
}

pub(crate) fn test_state(ids: &[&str]) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(
        RuntimeConfig::default(),
        Arc::new(test_catalog(ids)),
        store.clone(),
        1,
    );
    (state, store)
}

pub(crate) fn request(location_id: &str, access_time: &str) -> ParticipateRequest {
    ParticipateRequest {
        location_id: location_id.to_string(),
        access_time: Some(access_time.to_string()),
        user_agent: Some("test-agent".to_string()),
    }
}

pub(crate) fn attempt(id: u64, location_id: &str) -> VisitAttempt {
    VisitAttempt {
        id,
        location_id: location_id.to_string(),
        access_time: "t".to_string(),
        source_address: "10.0.0.1".to_string(),
        user_agent: "test-agent".to_string(),
        server_time: id as i64,
        winner: false,
    }
}
