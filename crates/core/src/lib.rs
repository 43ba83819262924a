//! Catalog Core Library
//!
//! This crate provides the core functionality of the catalog manager, a
//! terminal tool to browse, search, add and delete products kept in a flat
//! file.
//!
//! # Key Features
//!
//! - **Products**: Validated product records with a fixed set of category codes
//! - **Catalog**: An ordered in-memory collection with lookup and filter operations
//! - **File Handling**: Load the catalog from a delimited file and save it as JSON
//! - **Configuration**: Optional YAML configuration for paths and file layout
//! - **Error Handling**: One error type for every failure mode
//!
//! # Examples
//!
//! Loading the catalog and looking up a product:
//!
//! ```no_run
//! use catalog_core::file_handling::{load_catalog, LoadOptions};
//!
//! let catalog = load_catalog("products.csv", &LoadOptions::default())?;
//! if let Some(product) = catalog.search_by_id(10) {
//!     println!("Found: {}", product);
//! }
//! # Ok::<(), catalog_core::error::Error>(())
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod interpolation;
pub mod product;
