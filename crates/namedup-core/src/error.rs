//! Error types for namedup-core

use thiserror::Error;

/// Result type alias for name detection operations
pub type Result<T> = std::result::Result<T, NameDupError>;

/// Main error type for name detection operations
#[derive(Error, Debug)]
#[cfg_attr(feature = "native", derive(uniffi::Error), uniffi(flat_error))]
pub enum NameDupError {
    /// A required argument was not supplied at all
    #[error("Null input: {0}")]
    NullInput(String),

    /// An argument was empty, blank, or structurally invalid
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A nickname data source contains a line that cannot be parsed
    #[error("Corrupt nickname data at line {line}: {content:?}")]
    DataSourceCorrupt { line: usize, content: String },

    /// Reading a data source failed
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration could not be parsed or failed validation
    #[error("Config error: {0}")]
    Config(String),
}

impl NameDupError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        NameDupError::InvalidArgument(message.into())
    }
}

impl From<std::io::Error> for NameDupError {
    fn from(err: std::io::Error) -> Self {
        NameDupError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for NameDupError {
    fn from(err: toml::de::Error) -> Self {
        NameDupError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for NameDupError {
    fn from(err: serde_json::Error) -> Self {
        NameDupError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_message_names_line() {
        let err = NameDupError::DataSourceCorrupt {
            line: 3,
            content: "William Bill".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Corrupt nickname data at line 3: \"William Bill\""
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: NameDupError = io.into();
        assert!(matches!(err, NameDupError::Io(msg) if msg.contains("missing")));
    }
}
