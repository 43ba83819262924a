//! Console helpers for the line-oriented menu.
//!
//! - [`input`]: prompting, validate-and-retry loops, pausing and screen clearing
//! - [`fields`]: parsers that turn typed input into product fields
//! - [`table`]: fixed-width product table rendering

pub mod fields;
pub mod input;
pub mod table;

pub use fields::FieldParser;
pub use input::Prompter;

/// Spaces printed before every prompt and message
pub const DEFAULT_INDENTATION: usize = 3;

pub const PAUSE_MESSAGE: &str = "Pressione ENTER para continuar...";
