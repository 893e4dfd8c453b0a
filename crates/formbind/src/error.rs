use derive_more::Display;
use formbind_config::ConfigError;
use formbind_core::error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    /// The target type has a shape the binder cannot produce.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.kind, ErrorKind::Unsupported)
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match err.class {
            ErrorClass::InvalidInput => ErrorKind::InvalidInput,
            ErrorClass::NotFound => ErrorKind::NotFound,
            ErrorClass::Unsupported => ErrorKind::Unsupported,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Malformed target type reference.
    InvalidInput,

    /// No binding registered for the requested type or shape.
    NotFound,

    /// Generic target with more than one type argument, or nested generics.
    Unsupported,

    /// Binding configuration could not be loaded.
    Config,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Assemble,
    Config,
    Registry,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Assemble => Self::Assemble,
            CoreErrorOrigin::Registry => Self::Registry,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_keep_class_and_origin() {
        let err = Error::from(InternalError::unsupported_shape(3));

        assert!(err.is_unsupported());
        assert_eq!(err.origin, ErrorOrigin::Assemble);
        assert!(err.message.contains("found 3"));
    }

    #[test]
    fn config_errors_map_to_config_kind() {
        let err = Error::from(ConfigError::DuplicateName("account".to_string()));

        assert_eq!(err.kind, ErrorKind::Config);
        assert_eq!(err.origin, ErrorOrigin::Config);
        assert_eq!(err.to_string(), "duplicate binding name 'account'");
    }

    #[test]
    fn errors_serialize_with_their_taxonomy() {
        let err = Error::new(ErrorKind::NotFound, ErrorOrigin::Registry, "missing");
        let json = serde_json::to_value(&err).expect("serialize error");

        assert_eq!(json["kind"], "NotFound");
        assert_eq!(json["origin"], "Registry");
        assert_eq!(ErrorOrigin::Registry.to_string(), "Registry");
    }
}
