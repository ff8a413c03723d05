//! Error types for scryfall_image

use thiserror::Error;

/// Unified error type for card lookups
#[derive(Debug, Error)]
pub enum CardError {
    /// HTTP request failed (connectivity, DNS, TLS, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body was not valid JSON, or not the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Card record has no `image_uris` field
    #[error("Card record has no image_uris: {name}")]
    MissingImageUris { name: String },
    /// Card record has no `card_faces` field
    #[error("Card record has no card_faces: {name}")]
    NoFaces { name: String },
}

/// Result alias for card lookups
pub type Result<T> = std::result::Result<T, CardError>;
