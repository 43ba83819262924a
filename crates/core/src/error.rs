use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error reading products file at `{}`: {}", .path, .original)]
    Csv { path: String, original: csv::Error },

    #[error("Invalid record in `{}` at line {}: {}", .path, .line, .reason)]
    InvalidRecord {
        path: String,
        line: u64,
        reason: String,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Invalid product name: name may not be empty")]
    EmptyName,

    #[error("Invalid product price: {}", .0)]
    InvalidPrice(f64),

    #[error("Unknown product category: \"{}\"", .0)]
    UnknownCategory(String),

    #[error("Invalid delimiter `{}`: delimiter must be a single ASCII character", .0)]
    InvalidDelimiter(char),

    #[error("Product with ID {} not found", .0)]
    ProductNotFound(u32),

    #[error("Invalid {} value: \"{}\"", .field, .value)]
    InvalidField { field: String, value: String },

    #[error("Error parsing message template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering message template: {}", .0)]
    Render(#[from] RenderError),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Input was closed")]
    Interrupted,
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn json_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn invalid_record(path: String, line: u64, reason: String) -> Self {
        Self::InvalidRecord { path, line, reason }
    }

    pub fn invalid_field(field: &str, value: &str) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
