use thiserror::Error;

/// Errors that can occur when loading rule data or converting a custom storage format
/// into a zukai `RuleBundle`.
#[derive(Error, Debug)]
pub enum RuleConversionError {
    #[error("Failed to parse rule JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not read rule file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur when loading a layout configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse layout config: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Layout setting '{name}' must be a finite, non-negative number, got {value}")]
    InvalidSpacing { name: &'static str, value: f64 },
}

/// Errors that can occur when saving or loading a compiled flow artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Serialization failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Deserialization failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Could not access artifact file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
