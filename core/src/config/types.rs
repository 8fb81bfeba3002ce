use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub http_server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "statefacts_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_http_host")]
    pub host: String,

    #[serde(default = "default_http_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Permissive CORS for browser clients.
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
}

fn default_http_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    3500
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_cors_enabled() -> bool {
    true
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_http_host(),
            port: default_http_port(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_enabled: default_cors_enabled(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(try_from = "RawStoreConfig")]
pub struct StoreConfig {
    #[serde(flatten)]
    pub provider: StoreProvider,
}

/// `[store]` as written on disk. `provider` may be omitted and then means
/// `file`, so a table holding only `path` is valid.
#[derive(Deserialize)]
struct RawStoreConfig {
    #[serde(default)]
    provider: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

impl TryFrom<RawStoreConfig> for StoreConfig {
    type Error = String;

    fn try_from(raw: RawStoreConfig) -> Result<Self, Self::Error> {
        let provider = match raw.provider.as_deref().map(str::trim) {
            None | Some("file") => StoreProvider::File(FileStoreConfig { path: raw.path }),
            Some("memory") => StoreProvider::Memory,
            Some(other) => {
                return Err(format!(
                    "unknown store provider {other:?} (expected memory|file)"
                ))
            }
        };
        Ok(Self { provider })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum StoreProvider {
    #[serde(rename = "memory")]
    Memory,
    #[serde(rename = "file")]
    File(FileStoreConfig),
}

impl Default for StoreProvider {
    fn default() -> Self {
        Self::File(FileStoreConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FileStoreConfig {
    /// Collection file. Unset means `<data dir>/funfacts.json`.
    #[serde(default)]
    pub path: Option<String>,
}
