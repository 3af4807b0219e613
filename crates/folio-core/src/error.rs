//! Error types for folio-core.

/// Errors that can occur while building or driving the page.
///
/// None of these are fatal to the page as a whole: the orchestrator logs them
/// and moves on to the next startup step.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The element that should receive the project cards does not exist.
    #[error("Container not found: #{id}")]
    ContainerNotFound {
        /// Element id that was looked up
        id: String,
    },

    /// A DOM operation failed in the host environment.
    #[error("Host error: {message}")]
    Host {
        /// Description of the failed operation
        message: String,
    },

    /// Catalog or configuration text could not be parsed.
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse
        message: String,
    },

    /// A parsed value is structurally fine but semantically invalid.
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a container-not-found error.
    pub fn container_not_found<S: Into<String>>(id: S) -> Self {
        Error::ContainerNotFound { id: id.into() }
    }

    /// Creates a new host error.
    pub fn host<S: Into<String>>(message: S) -> Self {
        Error::Host {
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns `true` if the error only degrades the page (missing markup)
    /// rather than indicating broken data or a failing host.
    pub fn is_degradation(&self) -> bool {
        matches!(self, Error::ContainerNotFound { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::parse(err.message().to_string())
    }
}
