//! Error types for the Rudder system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::TypeTag;

/// Result type alias for Rudder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error carried through a converter or an invoked operation body.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for Rudder parse failures.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a missing-required error from the complete missing set.
    #[must_use]
    pub fn missing_required(missing: Vec<MissingParameter>) -> Self {
        Self::new(ErrorKind::MissingRequired { missing })
    }

    /// Creates a conversion error for one parameter.
    #[must_use]
    pub fn conversion(
        parameter: impl Into<String>,
        raw: impl Into<String>,
        target: TypeTag,
        source: BoxError,
    ) -> Self {
        Self::new(ErrorKind::Conversion {
            parameter: parameter.into(),
            raw: raw.into(),
            target,
            source,
        })
    }

    /// Creates an unknown-type-tag error.
    #[must_use]
    pub fn unknown_type_tag(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownTypeTag { tag: tag.into() })
    }

    /// Creates an unknown-type-identity error.
    #[must_use]
    pub fn unknown_type_identity(identity: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownTypeIdentity {
            identity: identity.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// One or more required descriptors have no bound parameter.
    ///
    /// Carries the complete missing set, not just the first offender.
    #[error("missing required parameters: {}", format_missing(missing))]
    MissingRequired {
        /// Every unmatched required descriptor, in declaration order.
        missing: Vec<MissingParameter>,
    },

    /// A raw value could not be converted to its declared type.
    #[error("could not parse {parameter} with value {raw:?} as {target}")]
    Conversion {
        /// The parameter being converted.
        parameter: String,
        /// The raw string value.
        raw: String,
        /// The declared target type.
        target: TypeTag,
        /// The underlying converter failure.
        #[source]
        source: BoxError,
    },

    /// A custom type tag has no registered converter.
    #[error("no converter registered for type tag: {tag}")]
    UnknownTypeTag {
        /// The unregistered tag.
        tag: String,
    },

    /// The instance factory has no constructor for a type identity.
    #[error("no constructor registered for type identity: {identity}")]
    UnknownTypeIdentity {
        /// The unresolvable identity.
        identity: String,
    },
}

/// A required descriptor that was never bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingParameter {
    /// Canonical descriptor name.
    pub name: String,
    /// Help text supplied at registration, if any.
    pub help: Option<String>,
}

impl MissingParameter {
    /// Creates a missing-parameter record.
    #[must_use]
    pub fn new(name: impl Into<String>, help: Option<String>) -> Self {
        Self {
            name: name.into(),
            help,
        }
    }
}

impl fmt::Display for MissingParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.help {
            Some(help) => write!(f, "{} ({help})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

fn format_missing(missing: &[MissingParameter]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
