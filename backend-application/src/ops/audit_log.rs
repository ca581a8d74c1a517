use std::sync::Arc;

use backend_domain::ports::PromotionStore;
use backend_domain::VisitAttempt;
use tokio::sync::Mutex;

/// Appends adjudicated visits to the shared log document and keeps it bounded.
/// The log is one document, so every append serializes through `write_lock`
/// across all locations. Append failures are advisory: the caller reports them
/// but an already-committed adjudication stands.
pub struct AuditLogWriter {
    store: Arc<dyn PromotionStore>,
    retention: usize,
    write_lock: Mutex<()>,
}

impl AuditLogWriter {
    pub fn new(store: Arc<dyn PromotionStore>, retention: usize) -> Self {
        Self {
            store,
            retention,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn append(&self, attempt: &VisitAttempt) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.store.load_log().await?;
        entries.push(attempt.clone());
        if entries.len() > self.retention {
            let excess = entries.len() - self.retention;
            entries.drain(..excess);
        }
        self.store.save_log(&entries).await
    }

    pub async fn clear(&self) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        self.store.save_log(&[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{attempt, MemoryStore};

    #[tokio::test]
    async fn append_keeps_only_most_recent_entries() {
        let store = Arc::new(MemoryStore::new());
        let writer = AuditLogWriter::new(store.clone(), 1000);

        for id in 1..=1005u64 {
            writer.append(&attempt(id, "plaza")).await.expect("append");
        }

        let entries = store.load_log().await.expect("log");
        assert_eq!(entries.len(), 1000);
        // the 5 oldest were evicted in arrival order
        assert_eq!(entries.first().map(|entry| entry.id), Some(6));
        assert_eq!(entries.last().map(|entry| entry.id), Some(1005));
    }

    #[tokio::test]
    async fn clear_empties_the_log() {
        let store = Arc::new(MemoryStore::new());
        let writer = AuditLogWriter::new(store.clone(), 1000);

        writer.append(&attempt(1, "plaza")).await.expect("append");
        writer.clear().await.expect("clear");

        let entries = store.load_log().await.expect("log");
        assert!(entries.is_empty());
    }
}
