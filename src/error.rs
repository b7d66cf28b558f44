use thiserror::Error;

/// Errors that can occur when reading a persisted graph document.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse graph document JSON: {0}")]
    JsonParse(String),
}

/// Errors that can occur when converting a custom source format into a canonical graph.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid source data: {0}")]
    Validation(String),
}

/// Errors that can occur when saving or loading a layout snapshot.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Could not access snapshot file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Snapshot serialization failed: {0}")]
    Encode(String),

    #[error("Snapshot deserialization failed: {0}")]
    Decode(String),
}

/// Error returned when a layout direction string is not recognized.
#[derive(Error, Debug, Clone)]
#[error("Unknown layout direction '{0}' (expected 'top-to-bottom'/'tb' or 'left-to-right'/'lr')")]
pub struct DirectionParseError(pub String);
