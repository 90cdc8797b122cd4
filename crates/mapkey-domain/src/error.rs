//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mapkey
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a registration
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Identifier registered more than once
    #[error("Duplicate key: '{key}' is already registered")]
    DuplicateKey {
        /// Label of the offending identifier
        key: String,
    },

    /// No provider registered for the identifier
    #[error("Unknown key: '{key}' is not registered. Available keys: {available:?}")]
    UnknownKey {
        /// Label of the requested identifier
        key: String,
        /// Labels of every registered identifier, sorted
        available: Vec<String>,
    },

    /// Alias lookup matched more than one binding
    #[error("Ambiguous key: '{key}' is served by {candidates:?}")]
    AmbiguousKey {
        /// Label of the requested identifier
        key: String,
        /// Labels of the bindings declaring the alias, sorted
        candidates: Vec<String>,
    },

    /// Provider produced an instance of another type than requested
    #[error("Type mismatch: provider for '{key}' did not produce a {expected}")]
    TypeMismatch {
        /// Label of the resolved identifier
        key: String,
        /// Name of the requested concrete type
        expected: &'static str,
    },

    /// Provider failed while producing an instance
    #[error("Provider for '{key}' failed: {source}")]
    Provider {
        /// Label of the identifier whose provider failed
        key: String,
        /// Failure reported by the provider
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Registry does not cover every expected identifier
    #[error("Incomplete registry: missing providers for {missing:?}")]
    IncompleteRegistry {
        /// Labels of the identifiers without a provider, sorted
        missing: Vec<String>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Registry error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a duplicate key error
    pub fn duplicate_key<S: Into<String>>(key: S) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// Create an unknown key error
    pub fn unknown_key<S: Into<String>>(key: S, available: Vec<String>) -> Self {
        Self::UnknownKey {
            key: key.into(),
            available,
        }
    }

    /// Create an ambiguous key error
    pub fn ambiguous_key<S: Into<String>>(key: S, candidates: Vec<String>) -> Self {
        Self::AmbiguousKey {
            key: key.into(),
            candidates,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>>(key: S, expected: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
        }
    }

    /// Wrap a provider failure
    pub fn provider<S, E>(key: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Provider {
            key: key.into(),
            source: source.into(),
        }
    }

    /// Create an incomplete registry error
    pub fn incomplete_registry(missing: Vec<String>) -> Self {
        Self::IncompleteRegistry { missing }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether the error reports a composition-time misconfiguration
    ///
    /// These abort composition; the remaining variants abort only the
    /// requesting operation.
    pub fn is_composition_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. }
                | Self::DuplicateKey { .. }
                | Self::IncompleteRegistry { .. }
                | Self::Configuration { .. }
        )
    }
}
