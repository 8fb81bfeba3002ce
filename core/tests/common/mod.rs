use async_trait::async_trait;
use std::sync::Mutex;

use statefacts_core::error::StoreError;
use statefacts_core::facts::{FactRecord, FactStore};

/// Minimal store for exercising the fact operations.
#[derive(Default)]
pub struct VecStore {
    records: Mutex<Vec<FactRecord>>,
    pub fail_saves: bool,
}

impl VecStore {
    pub fn with_facts(code: &str, facts: &[&str]) -> Self {
        let store = Self::default();
        store.records.lock().unwrap().push(FactRecord::new(
            code,
            facts.iter().map(|s| s.to_string()).collect(),
        ));
        store
    }

    pub fn facts_for(&self, code: &str) -> Option<Vec<String>> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.state_code == code)
            .map(|r| r.funfacts.clone())
    }
}

#[async_trait]
impl FactStore for VecStore {
    fn name(&self) -> &str {
        "vec"
    }

    async fn find_all(&self) -> Result<Vec<FactRecord>, StoreError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<FactRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.state_code == code)
            .cloned())
    }

    async fn create(&self, code: &str, funfacts: Vec<String>) -> Result<FactRecord, StoreError> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.state_code == code) {
            return Err(StoreError::Duplicate(code.to_string()));
        }
        let record = FactRecord::new(code, funfacts);
        records.push(record.clone());
        Ok(record)
    }

    async fn save(&self, mut record: FactRecord) -> Result<FactRecord, StoreError> {
        if self.fail_saves {
            return Err(StoreError::Io(std::io::Error::other("disk full")));
        }
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.state_code == record.state_code)
            .ok_or_else(|| StoreError::Missing(record.state_code.clone()))?;
        record.version = slot.version + 1;
        *slot = record.clone();
        Ok(record)
    }
}
