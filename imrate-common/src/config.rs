//! Configuration loading and image directory resolution
//!
//! Resolution priority order, highest first:
//! 1. Command-line argument
//! 2. Environment variable (`IMRATE_IMAGES_DIR` / `IMRATE_PORT`)
//! 3. TOML config file (`<config dir>/imrate/config.toml`)
//! 4. Compiled default

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Default port for the survey UI
pub const DEFAULT_PORT: u16 = 5760;

/// Fallback image directory, relative to the working directory
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Environment variable naming the image directory
pub const IMAGES_DIR_ENV: &str = "IMRATE_IMAGES_DIR";

/// Environment variable naming the listen port
pub const PORT_ENV: &str = "IMRATE_PORT";

/// Optional keys recognized in config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub images_dir: Option<PathBuf>,
    pub port: Option<u16>,
}

/// Resolve the directory scanned for survey images
pub fn resolve_images_dir(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(IMAGES_DIR_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Ok(config) = load_config_file() {
        if let Some(path) = config.images_dir {
            return path;
        }
    }

    // Priority 4: Compiled default
    PathBuf::from(DEFAULT_IMAGES_DIR)
}

/// Resolve the HTTP listen port with the same priority ladder
pub fn resolve_port(cli_arg: Option<u16>) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }

    if let Ok(value) = std::env::var(PORT_ENV) {
        if let Ok(port) = value.parse() {
            return port;
        }
    }

    if let Ok(config) = load_config_file() {
        if let Some(port) = config.port {
            return port;
        }
    }

    DEFAULT_PORT
}

/// Parse the platform config file, if present
pub fn load_config_file() -> Result<TomlConfig> {
    let path = config_file_path()?;
    let content = std::fs::read_to_string(&path)?;
    toml::from_str(&content)
        .map_err(|err| Error::Config(format!("{}: {}", path.display(), err)))
}

/// Platform config file location: `<config dir>/imrate/config.toml`
fn config_file_path() -> Result<PathBuf> {
    let path = dirs::config_dir()
        .map(|dir| dir.join("imrate").join("config.toml"))
        .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!(
            "config file not found: {}",
            path.display()
        )))
    }
}
