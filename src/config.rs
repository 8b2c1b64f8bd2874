use crate::error::{FolioError, Result};
use crate::types::config::FolioConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".folio/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/folio/config.toml";

pub fn load_config(root: &Path) -> Result<Option<FolioConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Existing config layers, lowest precedence first.
fn layer_paths(root: &Path, global_path: Option<&Path>) -> Vec<PathBuf> {
    global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.exists())
        .collect()
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<FolioConfig>> {
    if !root.join(DEFAULT_CONFIG_FILE).exists() {
        tracing::debug!(root = %root.display(), "no folio.toml found, using defaults");
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    for path in layer_paths(root, global_path) {
        tracing::debug!(path = %path.display(), "applying config layer");
        overlay(&mut merged, parse_layer(&path)?);
    }

    merged
        .try_into::<FolioConfig>()
        .map(Some)
        .map_err(|e| FolioError::ConfigParse(e.to_string()))
}

fn parse_layer(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| FolioError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; any other value replaces what was there.
fn overlay(base: &mut Value, layer: Value) {
    match layer {
        Value::Table(entries) if base.is_table() => {
            let Some(table) = base.as_table_mut() else {
                return;
            };
            for (key, value) in entries {
                match table.get_mut(&key) {
                    Some(existing) => overlay(existing, value),
                    None => {
                        table.insert(key, value);
                    }
                }
            }
        }
        value => *base = value,
    }
}
