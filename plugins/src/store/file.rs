//! Fact store persisted as a single JSON document collection on disk.
//!
//! The whole collection is held in memory and rewritten on every write
//! (temp file + rename), so a crash never leaves a half-written file.

use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

use statefacts_core::api::{FactRecord, FactStore, StoreError};

pub struct JsonFileFactStore {
    path: PathBuf,
    records: RwLock<Vec<FactRecord>>,
}

impl JsonFileFactStore {
    /// Open the collection at `path`. A missing file is an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice::<Vec<FactRecord>>(&bytes)
                .with_context(|| format!("Failed to parse fact collection {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read fact collection {}", path.display()))
            }
        };

        info!(
            path = %path.display(),
            records = records.len(),
            "Opened fact collection"
        );

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, records: &[FactRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), records = records.len(), "Persisted fact collection");
        Ok(())
    }
}

#[async_trait]
impl FactStore for JsonFileFactStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn find_all(&self) -> Result<Vec<FactRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<FactRecord>, StoreError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.state_code == code)
            .cloned())
    }

    async fn create(&self, code: &str, funfacts: Vec<String>) -> Result<FactRecord, StoreError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.state_code == code) {
            return Err(StoreError::Duplicate(code.to_string()));
        }

        let record = FactRecord::new(code, funfacts);
        let mut next = records.clone();
        next.push(record.clone());
        self.persist(&next).await?;
        *records = next;
        Ok(record)
    }

    async fn save(&self, mut record: FactRecord) -> Result<FactRecord, StoreError> {
        let mut records = self.records.write().await;
        let Some(pos) = records
            .iter()
            .position(|r| r.state_code == record.state_code)
        else {
            return Err(StoreError::Missing(record.state_code));
        };

        record.version = records[pos].version + 1;
        let mut next = records.clone();
        next[pos] = record.clone();
        self.persist(&next).await?;
        *records = next;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileFactStore::open(dir.path().join("facts.json"))
            .await
            .unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_writes_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("facts.json");

        {
            let store = JsonFileFactStore::open(&path).await.unwrap();
            let mut record = store.create("AL", vec!["A".into()]).await.unwrap();
            record.funfacts.push("B".into());
            store.save(record).await.unwrap();
            store.create("HI", vec!["Surf".into()]).await.unwrap();
        }

        let reopened = JsonFileFactStore::open(&path).await.unwrap();
        let al = reopened.find_by_code("AL").await.unwrap().unwrap();
        assert_eq!(al.funfacts, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(al.version, 1);
        assert_eq!(reopened.find_all().await.unwrap().len(), 2);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_duplicate_create_rejected() {
        let dir = tempdir().unwrap();
        let store = JsonFileFactStore::open(dir.path().join("facts.json"))
            .await
            .unwrap();
        store.create("AL", vec![]).await.unwrap();
        assert!(matches!(
            store.create("AL", vec![]).await,
            Err(StoreError::Duplicate(_))
        ));
    }

    #[tokio::test]
    async fn test_corrupt_file_fails_to_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("facts.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(JsonFileFactStore::open(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_reads_document_store_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("facts.json");
        std::fs::write(
            &path,
            r#"[{"_id":"0b6f2f0e-6d1a-4d43-9f60-0d1b3c2f8a11","stateCode":"KS","funfacts":["Wheat"],"__v":3}]"#,
        )
        .unwrap();
        let store = JsonFileFactStore::open(&path).await.unwrap();
        let ks = store.find_by_code("KS").await.unwrap().unwrap();
        assert_eq!(ks.funfacts, vec!["Wheat".to_string()]);
        assert_eq!(ks.version, 3);
    }
}
