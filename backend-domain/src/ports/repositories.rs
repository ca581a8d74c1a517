use async_trait::async_trait;
use std::collections::HashMap;

use crate::entities::VisitAttempt;

/// Durable storage for the two event-state documents: the winners mapping
/// (location id -> winning attempt) and the ordered visit log. Each save
/// replaces the whole document; a reader must never observe a partial write.
/// Loads before the first save return empty collections.
#[async_trait]
pub trait PromotionStore: Send + Sync {
    async fn load_winners(&self) -> anyhow::Result<HashMap<String, VisitAttempt>>;
    async fn save_winners(&self, winners: &HashMap<String, VisitAttempt>) -> anyhow::Result<()>;

    async fn load_log(&self) -> anyhow::Result<Vec<VisitAttempt>>;
    async fn save_log(&self, entries: &[VisitAttempt]) -> anyhow::Result<()>;
}
