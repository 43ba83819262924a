//! Configuration for the catalog manager.
//!
//! This module resolves the configuration file path, reads the optional YAML
//! configuration and expands shell variables like `~` in the configured paths.

use std::fs::File;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.catalog/config.yml";
/// Default path of the delimited products file read at startup
pub const DEFAULT_PRODUCTS_PATH: &str = "products.csv";
/// Default path the catalog is saved to
pub const DEFAULT_OUTPUT_PATH: &str = "catalogo.json";

/// Settings read from the configuration file.
///
/// Every field is optional in the YAML; missing ones take their defaults.
///
/// ```yaml
/// products_path: ~/data/products.csv
/// output_path: ~/data/catalogo.json
/// has_header: true
/// delimiter: ";"
/// clear_screen: false
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub products_path: String,
    pub output_path: String,
    /// Whether the first row of the products file is a header to skip
    pub has_header: bool,
    pub delimiter: char,
    /// Clear the terminal before drawing each screen
    pub clear_screen: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products_path: DEFAULT_PRODUCTS_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            has_header: true,
            delimiter: ',',
            clear_screen: true,
        }
    }
}

impl CatalogConfig {
    /// Returns a copy with `~` expanded in both paths.
    #[must_use]
    pub fn expanded(mut self) -> Self {
        self.products_path = expand_path(&self.products_path);
        self.output_path = expand_path(&self.output_path);
        self
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use catalog_core::config::get_config_path;
///
/// let default_path = get_config_path(&None);
/// assert!(default_path.ends_with("config.yml"));
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    expand_path(config_path)
}

/// Expands shell variables like `~` in a path.
#[must_use]
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Reads the configuration file, falling back to defaults when it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid YAML.
pub fn load_config(config_path: &str) -> Result<CatalogConfig> {
    if !Path::exists(Path::new(config_path)) {
        debug!("No config file at `{}`, using defaults", config_path);
        return Ok(CatalogConfig::default());
    }

    let reader = File::open(config_path)
        .map_err(|e| Error::io_error("config".to_string(), config_path.to_string(), e))?;

    // An empty file deserializes to unit, not to a struct
    let value: serde_yaml::Value = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    if value.is_null() {
        return Ok(CatalogConfig::default());
    }

    serde_yaml::from_value(value).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })
}
