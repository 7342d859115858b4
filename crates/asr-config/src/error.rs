use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AsrConfigError {
    /// A field failed type coercion or an enum field held an unrecognized
    /// tag. `message` carries the expected type or variant list.
    #[error("invalid value {value} for `{path}`: {message}")]
    Invalid {
        path: String,
        value: String,
        message: String,
    },
    /// The file/env layering step of the loader failed.
    #[error(transparent)]
    Layer(#[from] config::ConfigError),
}

impl AsrConfigError {
    pub(crate) fn invalid(path: impl Into<String>, value: &Value, message: impl ToString) -> Self {
        Self::Invalid {
            path: path.into(),
            value: value.to_string(),
            message: message.to_string(),
        }
    }

    /// Dotted path of the offending field, when this is a validation error.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Invalid { path, .. } => Some(path),
            Self::Layer(_) => None,
        }
    }
}
