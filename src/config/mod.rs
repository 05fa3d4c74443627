use std::{fs, path::Path};

use serde::Deserialize;

use crate::common::errors::{Error, Result};

#[derive(Deserialize, Default, Debug, PartialEq)]
pub struct Config {
    pub(crate) values: Option<Vec<i64>>,
    pub(crate) quiet: Option<bool>,
    pub(crate) color: Option<bool>,
}

impl Config {
    /// Read `~/.config/lifo/config`, the default configuration when it is missing
    pub fn new() -> Result<Config> {
        if let Some(path) = dirs::home_dir() {
            let config_path = path.join(".config").join("lifo").join("config");
            if config_path.is_file() {
                return Config::from_path(&config_path);
            }
        }
        Ok(Config::default())
    }

    pub fn from_path(path: &Path) -> Result<Config> {
        let cn = fs::read_to_string(path).map_err(|source| Error::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&cn)?)
    }
}
