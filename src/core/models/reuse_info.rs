//! Licensing facts collected for one file
//!
//! A [`ReuseInfo`] is built once by an extractor and never changed. Facts for
//! the same target coming from several sources (header, sidecar, manifest)
//! are combined with [`ReuseInfo::copy_union`] or [`ReuseInfo::merge`], each
//! of which returns a new record. Evidence only accumulates; there is no way
//! to remove a line or expression from a record.
//!
//! # Examples
//!
//! ```
//! use reuse::{Overrides, ReuseInfo};
//!
//! let old = ReuseInfo::default()
//!     .with_copyright_lines(["Jane Doe"])
//!     .with_source_path("foo.py");
//! let new = old
//!     .copy_union(
//!         Overrides::new()
//!             .copyright_lines(["Mr X"])
//!             .source_path(Some("bar.py")),
//!     )
//!     .unwrap();
//!
//! let lines: Vec<&str> = new.copyright_lines().iter().map(String::as_str).collect();
//! assert_eq!(lines, ["Jane Doe", "Mr X"]);
//! assert_eq!(new.source_path(), Some("bar.py"));
//! assert_eq!(old.source_path(), Some("foo.py"));
//! ```

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ReuseResult;

use super::overrides::{Overrides, Resolved};
use super::{SourceType, SpdxExpression};

/// Licensing and copyright information for one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ReuseInfo {
    spdx_expressions: BTreeSet<SpdxExpression>,
    copyright_lines: BTreeSet<String>,
    contributor_lines: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_type: Option<SourceType>,
}

impl ReuseInfo {
    /// Create a record from all of its fields
    #[must_use]
    pub const fn new(
        spdx_expressions: BTreeSet<SpdxExpression>,
        copyright_lines: BTreeSet<String>,
        contributor_lines: BTreeSet<String>,
        source_path: Option<String>,
        source_type: Option<SourceType>,
    ) -> Self {
        Self {
            spdx_expressions,
            copyright_lines,
            contributor_lines,
            source_path,
            source_type,
        }
    }

    /// Build with the given license expressions
    #[must_use]
    pub fn with_spdx_expressions<I, E>(mut self, expressions: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<SpdxExpression>,
    {
        self.spdx_expressions = expressions.into_iter().map(Into::into).collect();
        self
    }

    /// Build with the given copyright lines
    #[must_use]
    pub fn with_copyright_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.copyright_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Build with the given contributor lines
    #[must_use]
    pub fn with_contributor_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contributor_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Build with the path the facts were read from
    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Build with the kind of source the facts were read from
    #[must_use]
    pub const fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = Some(source_type);
        self
    }

    /// License expressions found
    #[must_use]
    pub const fn spdx_expressions(&self) -> &BTreeSet<SpdxExpression> {
        &self.spdx_expressions
    }

    /// Copyright statements found, verbatim
    #[must_use]
    pub const fn copyright_lines(&self) -> &BTreeSet<String> {
        &self.copyright_lines
    }

    /// Contributor statements found, verbatim
    #[must_use]
    pub const fn contributor_lines(&self) -> &BTreeSet<String> {
        &self.contributor_lines
    }

    /// Path the facts were read from, which may be a sidecar rather than the target
    #[must_use]
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    /// Kind of source the facts were read from
    #[must_use]
    pub const fn source_type(&self) -> Option<SourceType> {
        self.source_type
    }

    /// Return a copy with the overridden fields replaced outright
    ///
    /// Fields not named in `overrides` are carried over. Fails with
    /// [`ReuseError::UnknownAttributes`] if any name is not a field, even when
    /// other names are valid.
    ///
    /// [`ReuseError::UnknownAttributes`]: crate::ReuseError::UnknownAttributes
    pub fn copy(&self, overrides: Overrides) -> ReuseResult<Self> {
        let Resolved {
            spdx_expressions,
            copyright_lines,
            contributor_lines,
            source_path,
            source_type,
        } = overrides.resolve()?;
        Ok(Self {
            spdx_expressions: spdx_expressions.replace_or(&self.spdx_expressions),
            copyright_lines: copyright_lines.replace_or(&self.copyright_lines),
            contributor_lines: contributor_lines.replace_or(&self.contributor_lines),
            source_path: source_path.replace_or(&self.source_path),
            source_type: source_type.replace_or(&self.source_type),
        })
    }

    /// Return a copy with non-empty set overrides unioned into existing sets
    ///
    /// An empty set override and every scalar override replace the current
    /// value, exactly as [`copy`](Self::copy) would. Same name checks as `copy`.
    pub fn copy_union(&self, overrides: Overrides) -> ReuseResult<Self> {
        let Resolved {
            spdx_expressions,
            copyright_lines,
            contributor_lines,
            source_path,
            source_type,
        } = overrides.resolve()?;
        Ok(Self {
            spdx_expressions: spdx_expressions.union_or(&self.spdx_expressions),
            copyright_lines: copyright_lines.union_or(&self.copyright_lines),
            contributor_lines: contributor_lines.union_or(&self.contributor_lines),
            source_path: source_path.replace_or(&self.source_path),
            source_type: source_type.replace_or(&self.source_type),
        })
    }

    /// Fold another record for the same target into this one
    ///
    /// Sets are unioned. `source_path` and `source_type` are taken from
    /// `other` when it has them, so the most recently folded source wins.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        debug!(
            "merging facts from {:?} ({:?}) into {:?}",
            other.source_path, other.source_type, self.source_path
        );
        Self {
            spdx_expressions: self
                .spdx_expressions
                .union(&other.spdx_expressions)
                .cloned()
                .collect(),
            copyright_lines: self
                .copyright_lines
                .union(&other.copyright_lines)
                .cloned()
                .collect(),
            contributor_lines: self
                .contributor_lines
                .union(&other.contributor_lines)
                .cloned()
                .collect(),
            source_path: other.source_path.clone().or_else(|| self.source_path.clone()),
            source_type: other.source_type.or(self.source_type),
        }
    }

    /// Merge a sequence of records for the same target, in order
    #[must_use]
    pub fn fold<I: IntoIterator<Item = Self>>(records: I) -> Self {
        records.into_iter().fold(Self::default(), |acc, record| acc.merge(&record))
    }

    /// Whether any license expression or copyright line is present
    ///
    /// Contributor lines alone do not count.
    #[must_use]
    pub fn contains_copyright_or_licensing(&self) -> bool {
        !self.spdx_expressions.is_empty() || !self.copyright_lines.is_empty()
    }

    /// Whether every field is empty or absent
    ///
    /// An empty `source_path` counts as absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spdx_expressions.is_empty()
            && self.copyright_lines.is_empty()
            && self.contributor_lines.is_empty()
            && self.source_path.as_deref().is_none_or(str::is_empty)
            && self.source_type.is_none()
    }
}
