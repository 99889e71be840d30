use crate::config::ErrorMessages;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown module: {name}")]
    UnknownModuleError { name: String },

    #[error("Unknown environment: {name}")]
    UnknownEnvironmentError { name: String },

    #[error("Failed to load fragment '{fragment}': {message}")]
    FragmentError { fragment: String, message: String },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

/// Coarse grouping used when logging failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Ui,
}

impl ScoutError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoutError::ApiError(_) | ScoutError::FragmentError { .. } => ErrorCategory::Network,
            ScoutError::SerializationError(_) | ScoutError::IoError(_) => ErrorCategory::Data,
            ScoutError::UrlError(_)
            | ScoutError::TomlError(_)
            | ScoutError::TomlSerializeError(_)
            | ScoutError::ConfigError { .. }
            | ScoutError::InvalidConfigValueError { .. }
            | ScoutError::UnknownEnvironmentError { .. } => ErrorCategory::Configuration,
            ScoutError::UnknownModuleError { .. } | ScoutError::RenderError { .. } => {
                ErrorCategory::Ui
            }
        }
    }

    /// Picks the configured copy that best describes the failure, if any.
    pub fn user_message<'a>(&self, messages: &'a ErrorMessages) -> Option<&'a str> {
        let ScoutError::ApiError(err) = self else {
            return None;
        };

        if err.is_timeout() {
            return Some(&messages.api.timeout);
        }

        let status = err.status()?;
        match status.as_u16() {
            404 => Some(&messages.api.not_found),
            401 | 403 => Some(&messages.api.unauthorized),
            429 => Some(&messages.api.rate_limit),
            code if code >= 500 => Some(&messages.api.server_error),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        let err = ScoutError::FragmentError {
            fragment: "skills.html".to_string(),
            message: "404".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);

        let err = ScoutError::UnknownModuleError {
            name: "dashboard".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Ui);

        let err = ScoutError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_user_message_only_for_api_errors() {
        let messages = ErrorMessages::default();
        let err = ScoutError::RenderError {
            message: "missing region".to_string(),
        };
        assert!(err.user_message(&messages).is_none());
    }
}
