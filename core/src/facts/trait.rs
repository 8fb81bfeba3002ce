use crate::error::StoreError;
use crate::facts::models::FactRecord;
use async_trait::async_trait;

/// Persistent collection of [`FactRecord`]s keyed by state code.
///
/// Providers enforce one record per code. Nothing here locks a
/// fetch-mutate-save sequence; concurrent writers to the same code race and
/// the last `save` wins.
#[async_trait]
pub trait FactStore: Send + Sync {
    fn name(&self) -> &str;
    async fn find_all(&self) -> Result<Vec<FactRecord>, StoreError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<FactRecord>, StoreError>;
    /// Insert a new record; `StoreError::Duplicate` if one exists for `code`.
    async fn create(&self, code: &str, funfacts: Vec<String>) -> Result<FactRecord, StoreError>;
    /// Overwrite an existing record and bump its version.
    async fn save(&self, record: FactRecord) -> Result<FactRecord, StoreError>;
}
