mod load;
mod types;

pub use load::{
    apply_env_overrides, fill_store_path, get_data_dir, load_default, load_from_str,
    resolve_store_path,
};
pub use types::{
    AppConfig, FileStoreConfig, HttpServerConfig, LoggingConfig, StoreConfig, StoreProvider,
};
