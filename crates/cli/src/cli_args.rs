//! Command-line argument parsing.
//!
//! Every flag is optional: running without any starts the menu with the
//! configuration file values, or the built-in defaults.

use catalog_core::config::{expand_path, CatalogConfig};
use clap::Parser;

/// Command-line arguments for the catalog manager.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use catalog_cli::cli_args::Args;
///
/// let args = Args::parse_from(["catalogo", "--no-clear"]);
/// assert!(args.no_clear);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the configuration file YAML.
    ///
    /// If not provided, defaults to `~/.catalog/config.yml`. A missing file is not an error.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Path to the delimited products file loaded at startup.
    ///
    /// Overrides `products_path` from the configuration file.
    #[arg(long, short = 'p')]
    pub products_path: Option<String>,

    /// Path the catalog is saved to.
    ///
    /// Overrides `output_path` from the configuration file.
    #[arg(long, short = 'o')]
    pub output_path: Option<String>,

    /// Do not clear the terminal between screens.
    #[arg(long, action)]
    pub no_clear: bool,
}

impl Args {
    /// Overlays the flags given on the command line onto the configuration.
    #[must_use]
    pub fn apply_to(&self, mut config: CatalogConfig) -> CatalogConfig {
        if let Some(products_path) = &self.products_path {
            config.products_path = expand_path(products_path);
        }

        if let Some(output_path) = &self.output_path {
            config.output_path = expand_path(output_path);
        }

        if self.no_clear {
            config.clear_screen = false;
        }

        config
    }
}
