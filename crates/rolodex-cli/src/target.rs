use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use rolodex_config::{StorageConfig, StorageMode};
use rolodex_store::{paths, Store};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    Memory,
    File(PathBuf),
}

/// Flags win over the config file, which wins over the default data path.
pub fn resolve_target(
    in_memory: bool,
    db_path: Option<PathBuf>,
    storage: &StorageConfig,
) -> Result<StorageTarget> {
    if in_memory {
        return Ok(StorageTarget::Memory);
    }
    let custom = match (db_path, storage.mode) {
        (Some(path), _) => Some(path),
        (None, StorageMode::Memory) => return Ok(StorageTarget::Memory),
        (None, StorageMode::File) => storage.path.clone(),
    };
    if let Some(path) = custom.as_ref().filter(|path| path.is_dir()) {
        return Err(invalid_input(format!(
            "database path is a directory: {}",
            path.display()
        )));
    }
    let path = paths::resolve_db_path(custom).with_context(|| "resolve database path")?;
    Ok(StorageTarget::File(path))
}

pub fn open_store(target: &StorageTarget) -> Result<Store> {
    let store = match target {
        StorageTarget::Memory => {
            debug!("using in-memory database");
            Store::open_in_memory().with_context(|| "open in-memory database")?
        }
        StorageTarget::File(path) => {
            debug!(path = %path.display(), "database path resolved");
            Store::open(path).with_context(|| format!("open database {}", path.display()))?
        }
    };
    store.ensure_schema().with_context(|| "create contacts table")?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::{resolve_target, StorageTarget};
    use crate::error::CliError;
    use rolodex_config::{StorageConfig, StorageMode};
    use tempfile::TempDir;

    #[test]
    fn in_memory_flag_wins() {
        let temp = TempDir::new().expect("temp dir");
        let target = resolve_target(
            true,
            Some(temp.path().join("contacts.sqlite3")),
            &StorageConfig::default(),
        )
        .expect("resolve");
        assert_eq!(target, StorageTarget::Memory);
    }

    #[test]
    fn db_path_flag_overrides_memory_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("contacts.sqlite3");
        let config = StorageConfig {
            mode: StorageMode::Memory,
            path: None,
        };
        let target = resolve_target(false, Some(path.clone()), &config).expect("resolve");
        assert_eq!(target, StorageTarget::File(path));
    }

    #[test]
    fn config_selects_memory_storage() {
        let config = StorageConfig {
            mode: StorageMode::Memory,
            path: None,
        };
        let target = resolve_target(false, None, &config).expect("resolve");
        assert_eq!(target, StorageTarget::Memory);
    }

    #[test]
    fn config_path_is_used_for_file_storage() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("book").join("contacts.sqlite3");
        let config = StorageConfig {
            mode: StorageMode::File,
            path: Some(path.clone()),
        };
        let target = resolve_target(false, None, &config).expect("resolve");
        assert_eq!(target, StorageTarget::File(path));
    }

    #[test]
    fn directory_db_path_is_invalid_input() {
        let temp = TempDir::new().expect("temp dir");
        let err = resolve_target(
            false,
            Some(temp.path().to_path_buf()),
            &StorageConfig::default(),
        )
        .unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
