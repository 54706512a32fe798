//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no usable extension in `--ext {0}`")]
    EmptyExtensions(String),

    #[error("output path `{0}` has no file name")]
    OutputNotAFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::EmptyExtensions(",,".to_string());
        assert!(err.to_string().contains("--ext ,,"));

        let err = ConfigError::OutputNotAFile("out/..".to_string());
        assert!(err.to_string().contains("out/.."));
    }
}
