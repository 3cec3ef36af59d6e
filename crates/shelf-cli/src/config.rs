//! Optional TOML configuration and library path resolution.
//!
//! The library path resolves with the precedence:
//! `--library` flag > `SHELF_LIBRARY` env (handled by clap) >
//! `library.path` from the config file > `library.json` in the
//! current directory. A missing config file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default library file name when nothing else is configured.
pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub library: LibrarySection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LibrarySection {
    pub path: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Read the config file at `path`, returning `None` if it does not exist.
pub fn read_config(path: &Path) -> anyhow::Result<Option<ShelfConfig>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(anyhow::anyhow!(
                "Failed to read config {}: {}",
                path.display(),
                err
            ))
        }
    };
    let config = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Resolve the library path from the flag, the config file, and the default.
pub fn resolve_library_path(
    flag: Option<&str>,
    config: Option<&ShelfConfig>,
) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }
    if let Some(path) = config.and_then(|c| c.library.path.as_deref()) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_LIBRARY_FILE)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".config").join("shelf"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
