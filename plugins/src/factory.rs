use anyhow::{Context, Result};
use std::sync::Arc;

use statefacts_core::api::{AppConfig, FactStore, StoreProvider};

use crate::store::{JsonFileFactStore, MemoryFactStore};

pub async fn build_fact_store(cfg: &AppConfig) -> Result<Arc<dyn FactStore>> {
    match &cfg.store.provider {
        StoreProvider::Memory => Ok(Arc::new(MemoryFactStore::new())),
        StoreProvider::File(file_cfg) => {
            let path = file_cfg
                .path
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .context("store.path is required for the file provider")?;
            Ok(Arc::new(JsonFileFactStore::open(path).await?))
        }
    }
}
