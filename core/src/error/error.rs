use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("command failed: {0}")]
    Command(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Failures of a `FactStore` provider.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("a fact record for {0} already exists")]
    Duplicate(String),
    #[error("no fact record for {0}")]
    Missing(String),
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Rejections of the `:state` path parameter. Display strings are the
/// messages returned to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateCodeError {
    #[error("State abbreviation required")]
    Missing,
    #[error("Invalid state abbreviation parameter")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate state code in dataset: {0}")]
    DuplicateCode(String),
    #[error("malformed state code in dataset: {0:?}")]
    MalformedCode(String),
}
