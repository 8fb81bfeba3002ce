//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `statefacts_core::api` instead of reaching into internal modules.

pub use crate::config::{
    fill_store_path, load_default, resolve_store_path, AppConfig, FileStoreConfig,
    HttpServerConfig, LoggingConfig, StoreConfig, StoreProvider,
};
pub use crate::context::{AppContext, Services, ServicesFactory};
pub use crate::error::{CliError, StateCodeError, StoreError};
pub use crate::facts::{
    create_facts, delete_fact, join_state, join_states, modify_fact, no_fact_at_index_message,
    no_facts_message, random_fact, CreateOutcome, EditOutcome, FactIndex, FactRecord, FactStore,
    JoinedState,
};
pub use crate::states::{dataset, format_population, ContigFilter, StateCode, StateRecord};
