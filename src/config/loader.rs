use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SigtableConfig;
use crate::errors::{Error, Result};

/// File name searched for when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = ".sigtable.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<SigtableConfig, String> {
    toml::from_str::<SigtableConfig>(contents).map_err(|e| e.to_string())
}

/// Load a config file that the user named explicitly. Any problem is fatal.
pub fn load_config_from_path(path: &Path) -> Result<SigtableConfig> {
    let contents =
        read_config_file(path).map_err(|e| Error::config(path, format!("cannot read: {}", e)))?;
    let config = parse_config(&contents).map_err(|e| Error::config(path, e))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading a discovered config file
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SigtableConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Invalid config file {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for [`CONFIG_FILE_NAME`].
pub fn discover_config(start: PathBuf) -> SigtableConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No {} found. Using default config.", CONFIG_FILE_NAME);
            SigtableConfig::default()
        })
}

/// Load the explicit config when given, otherwise discover one from the
/// current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<SigtableConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }
    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(SigtableConfig::default())
        }
    }
}
