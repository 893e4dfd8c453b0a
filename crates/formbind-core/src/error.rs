use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Per-field problems are never reported through this type; they are
/// collected as validation issues instead.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Target type has a generic shape the assembler cannot bind.
    pub fn unsupported_shape(arity: usize) -> Self {
        Self::new(
            ErrorClass::Unsupported,
            ErrorOrigin::Assemble,
            format!(
                "binder supports only generic types with a single type argument (found {arity})"
            ),
        )
    }

    /// Type name that no binding has been registered for.
    pub(crate) fn not_registered(name: &str) -> Self {
        Self::new(
            ErrorClass::NotFound,
            ErrorOrigin::Registry,
            format!("no form binding registered for type '{name}'"),
        )
    }

    /// Type registered for scalar binding only, requested as a list.
    pub(crate) fn not_enumerable(name: &str) -> Self {
        Self::new(
            ErrorClass::NotFound,
            ErrorOrigin::Registry,
            format!("type '{name}' is not registered as enumerable"),
        )
    }

    /// Malformed target type reference text.
    pub(crate) fn invalid_type_ref(text: &str, reason: &str) -> Self {
        Self::new(
            ErrorClass::InvalidInput,
            ErrorOrigin::Registry,
            format!("invalid type reference '{text}': {reason}"),
        )
    }

    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.class, ErrorClass::Unsupported)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    NotFound,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Assemble,
    Registry,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Assemble => "assemble",
            Self::Registry => "registry",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
