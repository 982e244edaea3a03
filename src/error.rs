//! Error types for keyfacet.

use thiserror::Error;

/// Main error type for keyfacet operations.
#[derive(Error, Debug)]
pub enum KeyfacetError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Ontology error: {0}")]
    Ontology(#[from] OntologyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors raised by the remote lexical and vocabulary services.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Ontology access errors.
#[derive(Error, Debug)]
pub enum OntologyError {
    #[error("Failed to load ontology: {0}")]
    Load(String),

    #[error("Duplicate class definition: {0}")]
    DuplicateClass(String),
}

/// Result type alias for keyfacet operations.
pub type Result<T> = std::result::Result<T, KeyfacetError>;
