use std::path::PathBuf;

/// Cost model error types
///
/// Core cost operations are infallible; these cover catalog construction,
/// configuration, session input and writing exported summaries.
#[derive(Debug, thiserror::Error)]
pub enum CostModelError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Two catalog considerations share the same selection key
    #[error("Duplicate consideration name: {0}")]
    DuplicateConsideration(String),
    /// Unparseable interactive session command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    /// Failed to write an exported summary
    #[error("Failed to write summary to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CostModelError {
    /// Short machine-readable name, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config_error",
            Self::DuplicateConsideration(_) => "duplicate_consideration",
            Self::InvalidCommand(_) => "invalid_command",
            Self::Export { .. } => "export_error",
        }
    }
}

impl From<config::ConfigError> for CostModelError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CostModelError::InvalidCommand("fly".to_string());
        assert_eq!(error.to_string(), "Invalid command: fly");

        let error = CostModelError::Export {
            path: PathBuf::from("/tmp/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "Failed to write summary to /tmp/out.txt: denied");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(CostModelError::Config("x".to_string()).kind(), "config_error");
        assert_eq!(
            CostModelError::DuplicateConsideration("x".to_string()).kind(),
            "duplicate_consideration"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err = config::ConfigError::Message("bad value".to_string());
        let error: CostModelError = err.into();
        assert_eq!(error.to_string(), "Configuration error: bad value");
    }
}
