use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::AppState;
use backend_domain::ports::PromotionStore;
use backend_infrastructure::{load_catalog, AppConfig, JsonFileStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let catalog = Arc::new(load_catalog(&config.catalog_path).await?);
        info!("catalog loaded with {} locations", catalog.len());

        let store: Arc<dyn PromotionStore> = Arc::new(JsonFileStore::new(&config.data_dir));

        // visit ids stay monotonic across restarts; a winner may be missing
        // from the log if its audit append failed, so scan both documents
        let log = store.load_log().await?;
        let winners = store.load_winners().await?;
        let max_seen = log
            .iter()
            .map(|entry| entry.id)
            .chain(winners.values().map(|entry| entry.id))
            .max()
            .unwrap_or(0);

        let state = AppState::new(runtime_config, catalog, store, max_seen + 1);
        Ok(Self { state })
    }
}
