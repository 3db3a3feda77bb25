//! Error types for MJCF serialization and deserialization.

use thiserror::Error;

/// Errors raised while serializing or deserializing MJCF models.
#[derive(Error, Debug)]
pub enum SerdeError {
    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML emission error from the quick-xml backend.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error during serialization.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Inconsistency detected while assembling the XML element tree
    /// (duplicate attribute, flattening a node with children).
    #[error(transparent)]
    Element(#[from] mjcf_serde_support::ElementError),

    /// The instance failed model validation.
    #[error(transparent)]
    Validation(#[from] mjcf::ValidationError),

    /// Custom error message.
    #[error("{0}")]
    Custom(String),
}

impl From<String> for SerdeError {
    fn from(msg: String) -> Self {
        SerdeError::Custom(msg)
    }
}

impl From<&str> for SerdeError {
    fn from(msg: &str) -> Self {
        SerdeError::Custom(msg.to_string())
    }
}

/// Result type alias for MJCF serialization operations.
pub type Result<T> = std::result::Result<T, SerdeError>;
