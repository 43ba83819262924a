//! Field parsers used by interactive prompts.
//!
//! Each parser turns the raw line typed by the user into a typed value, or
//! rejects it so the prompt can ask again.

use catalog_core::error::{Error, Result};
use catalog_core::product::Category;

/// Converts and validates one line of user input.
pub trait FieldParser {
    type Output;

    /// Parses the raw input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not acceptable for this field.
    fn parse(&self, raw: &str) -> Result<Self::Output>;
}

/// Non-negative integer, used for identifiers and quantities.
pub struct IntegerField;

impl FieldParser for IntegerField {
    type Output = u32;

    fn parse(&self, raw: &str) -> Result<u32> {
        raw.trim()
            .parse()
            .map_err(|_| Error::invalid_field("integer", raw))
    }
}

/// Text that must not be blank. Returned trimmed.
pub struct TextField;

impl FieldParser for TextField {
    type Output = String;

    fn parse(&self, raw: &str) -> Result<String> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(Error::invalid_field("text", raw));
        }
        Ok(text.to_string())
    }
}

/// One of the known category codes, in any letter case.
pub struct CategoryField;

impl FieldParser for CategoryField {
    type Output = Category;

    fn parse(&self, raw: &str) -> Result<Category> {
        raw.parse()
    }
}

/// Non-negative, finite decimal number.
pub struct DecimalField;

impl FieldParser for DecimalField {
    type Output = f64;

    fn parse(&self, raw: &str) -> Result<f64> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| Error::invalid_field("decimal", raw))?;

        if !value.is_finite() || value < 0.0 {
            return Err(Error::invalid_field("decimal", raw));
        }

        Ok(value)
    }
}

/// `S`/`SIM` or `N`/`NAO`/`NÃO`.
pub struct YesNoField;

impl FieldParser for YesNoField {
    type Output = bool;

    fn parse(&self, raw: &str) -> Result<bool> {
        match raw.trim().to_uppercase().as_str() {
            "S" | "SIM" => Ok(true),
            "N" | "NAO" | "NÃO" => Ok(false),
            _ => Err(Error::invalid_field("answer", raw)),
        }
    }
}
