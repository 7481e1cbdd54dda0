use std::fs;
use std::path::Path;

use crate::io::store_io::StoreError;
use crate::model::config::StoreConfig;

/// Read and parse config.toml from the tally directory.
pub fn read_config(tally_dir: &Path) -> Result<StoreConfig, StoreError> {
    let config_path = tally_dir.join("config.toml");
    let config_text = fs::read_to_string(&config_path).map_err(|e| StoreError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: StoreConfig = toml::from_str(&config_text)?;
    Ok(config)
}
