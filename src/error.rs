//! Error types for the compliance data model

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the compliance data model
///
/// These are named conditions only. Classifier predicates never fail; record
/// merges fail only when the caller hands in overrides that do not fit the
/// record's fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReuseError {
    /// No SPDX identifier could be determined for a license file
    ///
    /// Raised by collaborators that cross-reference license texts against
    /// the license list; this crate only defines the condition.
    #[error("could not find SPDX identifier for license file {}", path.display())]
    IdentifierNotFound {
        /// The license file that could not be resolved
        path: PathBuf,
    },

    /// Overrides named fields that do not exist on the record
    #[error("the following attributes do not exist in ReuseInfo: {}", names.join(", "))]
    UnknownAttributes {
        /// Offending names, sorted
        names: Vec<String>,
    },

    /// A known field was given a value of the wrong kind
    #[error("attribute {name} expects {expected}, got {actual}")]
    MismatchedAttribute {
        /// Field name
        name: String,
        /// Kind of value the field holds
        expected: &'static str,
        /// Kind of value that was supplied
        actual: &'static str,
    },

    /// Settings could not be parsed or serialized
    #[error("invalid settings: {0}")]
    Config(String),
}

/// Result alias for this crate
pub type ReuseResult<T> = Result<T, ReuseError>;

impl ReuseError {
    /// Create an [`ReuseError::IdentifierNotFound`] for the given license file
    #[must_use]
    pub fn identifier_not_found(path: impl Into<PathBuf>) -> Self {
        Self::IdentifierNotFound { path: path.into() }
    }

    /// Whether this error signals a contract violation between caller and record
    #[must_use]
    pub const fn is_invalid_override(&self) -> bool {
        matches!(self, Self::UnknownAttributes { .. } | Self::MismatchedAttribute { .. })
    }
}
