use std::path::{Path, PathBuf};

use super::types::{AppConfig, FileStoreConfig, StoreProvider};

/// Get the default data directory: ~/.statefacts
pub fn get_data_dir() -> anyhow::Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".statefacts"))
}

pub fn load_from_str(s: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str::<AppConfig>(s)?)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.statefacts/config.toml (highest)
    let data_dir = get_data_dir()?;
    let user_config = data_dir.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg = if user_config.exists() {
        load_from_str(&std::fs::read_to_string(&user_config)?)?
    } else if local_config.exists() {
        load_from_str(&std::fs::read_to_string(local_config)?)?
    } else {
        AppConfig::default()
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    resolve_store_path(&mut cfg)?;

    Ok(cfg)
}

/// Point an unset file store at `<data dir>/funfacts.json`, creating the
/// data directory. Must run again after anything that can switch the
/// provider to `file` (e.g. `serve --store file`).
pub fn resolve_store_path(cfg: &mut AppConfig) -> anyhow::Result<()> {
    let data_dir = get_data_dir()?;
    if fill_store_path(cfg, &data_dir) {
        std::fs::create_dir_all(&data_dir)?;
    }
    Ok(())
}

/// Fill an unset file-store path under `data_dir`. Returns true if it did.
pub fn fill_store_path(cfg: &mut AppConfig, data_dir: &Path) -> bool {
    let StoreProvider::File(ref mut file_cfg) = cfg.store.provider else {
        return false;
    };
    let unset = file_cfg
        .path
        .as_deref()
        .map(|s| s.trim().is_empty())
        .unwrap_or(true);
    if unset {
        file_cfg.path = Some(data_dir.join("funfacts.json").to_string_lossy().to_string());
    }
    unset
}

/// Environment variable overrides (Priority 0: highest). `lookup` is
/// injected so tests need not touch the process environment.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("PORT") {
        cfg.http_server.port = v
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT {v:?}: {e}"))?;
    }
    if let Some(v) = get("STATEFACTS_HOST") {
        cfg.http_server.host = v;
    }
    if let Some(v) = get("STATEFACTS_LOG_LEVEL") {
        cfg.logging.level = v;
    }
    if let Some(v) = get("STATEFACTS_STORE_PROVIDER") {
        cfg.store.provider = match v.trim() {
            "memory" => StoreProvider::Memory,
            "file" => match &cfg.store.provider {
                StoreProvider::File(existing) => StoreProvider::File(existing.clone()),
                StoreProvider::Memory => StoreProvider::File(FileStoreConfig::default()),
            },
            other => anyhow::bail!("unknown store provider {other:?} (expected memory|file)"),
        };
    }
    if let Some(v) = get("STATEFACTS_STORE_PATH") {
        if let StoreProvider::File(ref mut file_cfg) = cfg.store.provider {
            file_cfg.path = Some(v);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.http_server.port, 3500);
        assert_eq!(cfg.http_server.host, "127.0.0.1");
        assert!(cfg.http_server.cors_enabled);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(
            cfg.store.provider,
            StoreProvider::File(FileStoreConfig { path: None })
        );
    }

    #[test]
    fn test_load_from_str_sections() {
        let cfg = load_from_str(
            r#"
            [http_server]
            port = 8080

            [store]
            provider = "memory"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.http_server.port, 8080);
        assert_eq!(cfg.http_server.host, "127.0.0.1");
        assert_eq!(cfg.store.provider, StoreProvider::Memory);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_load_from_str_file_store() {
        let cfg = load_from_str(
            r#"
            [store]
            provider = "file"
            path = "/tmp/facts.json"
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.store.provider,
            StoreProvider::File(FileStoreConfig {
                path: Some("/tmp/facts.json".into())
            })
        );
    }

    #[test]
    fn test_store_table_without_provider_is_file() {
        let cfg = load_from_str(
            r#"
            [store]
            path = "/tmp/facts.json"
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.store.provider,
            StoreProvider::File(FileStoreConfig {
                path: Some("/tmp/facts.json".into())
            })
        );

        let err = load_from_str("[store]\nprovider = \"mongo\"\n").unwrap_err();
        assert!(err.to_string().contains("unknown store provider"));
    }

    #[test]
    fn test_fill_store_path() {
        let data_dir = Path::new("/srv/statefacts");

        let mut cfg = AppConfig::default();
        assert!(fill_store_path(&mut cfg, data_dir));
        assert_eq!(
            cfg.store.provider,
            StoreProvider::File(FileStoreConfig {
                path: Some(data_dir.join("funfacts.json").to_string_lossy().to_string())
            })
        );

        // An explicit path is left alone.
        assert!(!fill_store_path(&mut cfg, Path::new("/elsewhere")));

        let mut memory = AppConfig::default();
        memory.store.provider = StoreProvider::Memory;
        assert!(!fill_store_path(&mut memory, data_dir));
        assert_eq!(memory.store.provider, StoreProvider::Memory);
    }

    #[test]
    fn test_env_overrides() {
        let mut cfg = AppConfig::default();
        apply_env_overrides(
            &mut cfg,
            env(&[
                ("PORT", "4000"),
                ("STATEFACTS_HOST", "0.0.0.0"),
                ("STATEFACTS_STORE_PATH", "/data/f.json"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.http_server.port, 4000);
        assert_eq!(cfg.http_server.host, "0.0.0.0");
        assert_eq!(
            cfg.store.provider,
            StoreProvider::File(FileStoreConfig {
                path: Some("/data/f.json".into())
            })
        );
    }

    #[test]
    fn test_env_overrides_ignore_blank_and_reject_garbage() {
        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, env(&[("PORT", "  ")])).unwrap();
        assert_eq!(cfg.http_server.port, 3500);

        assert!(apply_env_overrides(&mut cfg, env(&[("PORT", "abc")])).is_err());
        assert!(
            apply_env_overrides(&mut cfg, env(&[("STATEFACTS_STORE_PROVIDER", "mongo")])).is_err()
        );

        apply_env_overrides(&mut cfg, env(&[("STATEFACTS_STORE_PROVIDER", "memory")])).unwrap();
        assert_eq!(cfg.store.provider, StoreProvider::Memory);
    }
}
