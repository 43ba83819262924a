//! The main menu loop and its actions.
//!
//! A [`Session`] owns the catalog for the lifetime of the program. Each pass
//! of [`Session::run`] draws the menu, reads one command and dispatches it:
//!
//! - `L` / `LISTAR`: list the catalog
//! - `P` / `PESQUISAR`: look a product up by ID
//! - `PT` / `TIPO`: list the products of one category
//! - `A` / `ACRESCENTAR`: add a product
//! - `E` / `ELIMINAR`: delete a product after confirmation
//! - `G` / `GUARDAR`: save the catalog
//! - `T` / `TERMINAR`: quit

pub mod session;
pub mod types;

pub use session::Session;
pub use types::{Flow, MenuCommand};

pub const OPTION_PROMPT: &str = "OPÇÃO> ";

pub const INVALID_OPTION_MESSAGE: &str = "Opção inválida";

/// Printed whenever the program ends, including on interrupt
pub const FAREWELL_MESSAGE: &str = "O programa vai terminar...";
