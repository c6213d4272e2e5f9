use derive_more::Display;
use serde::{Deserialize, Serialize};
use spectral_core::{
    ValidationError,
    status::{StatusUpdateError, TransitionError, UnknownStatus},
    view::FormError,
};
use spectral_schema::SchemaError;
use std::fmt;
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
}

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        let kind = match &err {
            SchemaError::Validation(_) => ErrorKind::Schema(SchemaErrorKind::Invalid),
            SchemaError::DuplicateEntity(_) => ErrorKind::Schema(SchemaErrorKind::Duplicate),
            SchemaError::EntityNotFound(_) => ErrorKind::Schema(SchemaErrorKind::NotFound),
            SchemaError::Export(_) => ErrorKind::Internal,
        };

        Self::new(kind, ErrorOrigin::Registry, err.to_string())
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorKind::Validation, ErrorOrigin::Entity, err.to_string())
    }
}

impl From<FormError> for Error {
    fn from(err: FormError) -> Self {
        Self::new(ErrorKind::Validation, ErrorOrigin::Field, err.to_string())
    }
}

impl From<TransitionError> for Error {
    fn from(err: TransitionError) -> Self {
        Self::new(ErrorKind::Transition, ErrorOrigin::Status, err.to_string())
    }
}

impl From<UnknownStatus> for Error {
    fn from(err: UnknownStatus) -> Self {
        Self::new(ErrorKind::Validation, ErrorOrigin::Status, err.to_string())
    }
}

impl<E: fmt::Display> From<StatusUpdateError<E>> for Error {
    fn from(err: StatusUpdateError<E>) -> Self {
        match err {
            StatusUpdateError::Transition(err) => err.into(),
            StatusUpdateError::Persist(_) => {
                Self::new(ErrorKind::Internal, ErrorOrigin::Status, err.to_string())
            }
        }
    }
}

impl From<spectral_core::Error> for Error {
    fn from(err: spectral_core::Error) -> Self {
        match err {
            spectral_core::Error::Validation(err) => err.into(),
            spectral_core::Error::Transition(err) => err.into(),
            spectral_core::Error::UnknownStatus(err) => err.into(),
            spectral_core::Error::Form(err) => err.into(),
        }
    }
}

#[cfg(feature = "theme")]
mod theme {
    use super::{Error, ErrorKind, ErrorOrigin, ThemeErrorKind};
    use spectral_theme::{ColorError, ConfigError, ThemeError};

    impl From<ColorError> for Error {
        fn from(err: ColorError) -> Self {
            Self::new(
                ErrorKind::Theme(ThemeErrorKind::Color),
                ErrorOrigin::Theme,
                err.to_string(),
            )
        }
    }

    impl From<ThemeError> for Error {
        fn from(err: ThemeError) -> Self {
            let kind = match &err {
                ThemeError::UnknownDefault(_) | ThemeError::UnknownTheme(_) => {
                    ThemeErrorKind::NotFound
                }
                ThemeError::DuplicateTheme(_) | ThemeError::EmptyId => ThemeErrorKind::Invalid,
            };

            Self::new(ErrorKind::Theme(kind), ErrorOrigin::Theme, err.to_string())
        }
    }

    impl From<ConfigError> for Error {
        fn from(err: ConfigError) -> Self {
            Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
        }
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Untrusted input failed a field or record rule.
    Validation,

    /// A status change outside the transition table.
    Transition,

    Schema(SchemaErrorKind),
    Theme(ThemeErrorKind),
    Config,

    /// The caller cannot remediate this.
    Internal,
}

///
/// SchemaErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SchemaErrorKind {
    /// A definition broke a schema rule.
    Invalid,

    /// An entity name was registered twice.
    Duplicate,

    NotFound,
}

///
/// ThemeErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ThemeErrorKind {
    /// A palette color could not be parsed.
    Color,

    /// Theme set is malformed (empty or duplicate ids).
    Invalid,

    NotFound,
}

///
/// ErrorOrigin
/// Where in the pipeline the error was raised.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Entity,
    Field,
    Registry,
    Status,
    Theme,
}

///
/// TESTS
///
