use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use backend_domain::ports::PromotionStore;
use backend_domain::VisitAttempt;

/// File-backed store: one JSON document per collection under the data
/// directory. Saves go through a temp file plus rename, so a concurrent
/// reader only ever sees the previous or the new document, never a torn one.
/// Callers serialize writes to the same document at the application layer.
pub struct JsonFileStore {
    winners_path: PathBuf,
    log_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            winners_path: data_dir.join("winners.json"),
            log_path: data_dir.join("visit_log.json"),
        }
    }

    async fn load_document<T>(path: &Path) -> anyhow::Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(path).await?;
        if content.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn save_document<T>(path: &Path, value: &T) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
    {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_vec_pretty(value)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, &content).await?;
        fs::rename(&tmp_path, path).await?;
        Ok(())
    }
}

#[async_trait]
impl PromotionStore for JsonFileStore {
    async fn load_winners(&self) -> anyhow::Result<HashMap<String, VisitAttempt>> {
        Self::load_document(&self.winners_path).await
    }

    async fn save_winners(&self, winners: &HashMap<String, VisitAttempt>) -> anyhow::Result<()> {
        Self::save_document(&self.winners_path, winners).await
    }

    async fn load_log(&self) -> anyhow::Result<Vec<VisitAttempt>> {
        Self::load_document(&self.log_path).await
    }

    async fn save_log(&self, entries: &[VisitAttempt]) -> anyhow::Result<()> {
        Self::save_document(&self.log_path, entries).await
    }
}
