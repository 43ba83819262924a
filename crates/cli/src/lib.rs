//! Catalog CLI Library
//!
//! This crate provides the interactive terminal front end of the catalog
//! manager. It draws a text menu, reads commands and field values from the
//! console, and runs them against the catalog held by `catalog-core`.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line flags that override the configuration file
//! - [`console`]: Prompting with validate-and-retry loops, field parsers and tables
//! - [`menu`]: The session context and the menu loop
//!
//! # Examples
//!
//! ```bash
//! # Use ./products.csv and save to ./catalogo.json
//! catalogo
//!
//! # Point at other files
//! catalogo --products-path ~/data/products.csv --output-path /tmp/catalogo.json
//!
//! # Keep the scrollback (do not clear the screen between menus)
//! catalogo --no-clear
//! ```

pub mod cli_args;
pub mod console;
pub mod menu;
