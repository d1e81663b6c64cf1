//! Error types for the Mira Colors crate

use thiserror::Error;

use crate::palette::PaletteId;

/// Main error type for the Mira Colors crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown color '{input}'")]
    UnknownColor { input: String },

    #[error("unknown palette '{input}'. Expected one of: {expected}")]
    UnknownPalette { input: String, expected: String },

    #[error("unknown fun fact category '{input}'. Expected one of: {expected}")]
    UnknownFactCategory { input: String, expected: String },

    #[error("star value {value} is out of range (must be 0-3)")]
    InvalidStars { value: u8 },

    #[error("no progress record for palette {palette}")]
    MissingProgress { palette: PaletteId },

    #[error("palette {palette} is not defined in the catalog")]
    MissingPalette { palette: PaletteId },

    #[error("invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
