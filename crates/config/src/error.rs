use std::path;

/// Everything that can go wrong while turning a site declaration into a usable configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("Failed to read config `{}`", path.display())]
    Read {
        path: path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config `{origin}`")]
    Parse {
        origin: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Unsupported config format `{extension}`, expected one of yml, yaml, json, toml")]
    UnsupportedFormat { extension: String },

    #[error("Failed to serialize config")]
    Serialize {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("`{field}` is required")]
    Missing { field: String },

    #[error("`{field}` must not be empty")]
    Empty { field: String },

    #[error("`{field}` is invalid: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigurationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub fn empty(field: impl Into<String>) -> Self {
        Self::Empty {
            field: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Path of the offending field (e.g. `headerLinks[2]`), when the error is about one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Missing { field } | Self::Empty { field } | Self::Invalid { field, .. } => {
                Some(field.as_str())
            }
            Self::Read { .. }
            | Self::Parse { .. }
            | Self::UnsupportedFormat { .. }
            | Self::Serialize { .. } => None,
        }
    }
}
