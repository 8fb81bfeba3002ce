//! In-process fact store. Contents live only as long as the process.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use statefacts_core::api::{FactRecord, FactStore, StoreError};

#[derive(Default)]
pub struct MemoryFactStore {
    records: RwLock<HashMap<String, FactRecord>>,
}

impl MemoryFactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, e.g. from a snapshot. Later records win on duplicate codes.
    pub fn with_records(records: impl IntoIterator<Item = FactRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.state_code.clone(), r))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }
}

#[async_trait]
impl FactStore for MemoryFactStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn find_all(&self) -> Result<Vec<FactRecord>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<FactRecord>, StoreError> {
        Ok(self.records.read().await.get(code).cloned())
    }

    async fn create(&self, code: &str, funfacts: Vec<String>) -> Result<FactRecord, StoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(code) {
            return Err(StoreError::Duplicate(code.to_string()));
        }
        let record = FactRecord::new(code, funfacts);
        records.insert(code.to_string(), record.clone());
        Ok(record)
    }

    async fn save(&self, mut record: FactRecord) -> Result<FactRecord, StoreError> {
        let mut records = self.records.write().await;
        let Some(existing) = records.get_mut(&record.state_code) else {
            return Err(StoreError::Missing(record.state_code));
        };
        record.version = existing.version + 1;
        *existing = record.clone();
        Ok(record)
    }
}
