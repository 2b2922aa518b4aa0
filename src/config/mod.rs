// Configuration module for sigtable
mod core;
mod loader;

pub use self::core::{HarvestConfig, OutputConfig, SigtableConfig};

pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
