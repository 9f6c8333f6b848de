use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Fuzz input must be {expected} bytes, got {actual}")]
    FuzzInputSize { expected: usize, actual: usize },

    #[error("Invalid channel values: {0}")]
    InvalidValues(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_input_size_message() {
        let error = AppError::FuzzInputSize {
            expected: 32,
            actual: 7,
        };
        assert_eq!(error.to_string(), "Fuzz input must be 32 bytes, got 7");
    }

    #[test]
    fn test_invalid_values_message() {
        let error = AppError::InvalidValues("expected 3 or 4 values".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid channel values: expected 3 or 4 values"
        );
    }

    #[test]
    fn test_config_read_message() {
        let error = AppError::ConfigRead {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read config missing.yaml: not found"
        );
    }
}
