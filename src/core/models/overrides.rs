//! Named field replacements for rebuilding a [`ReuseInfo`]
//!
//! Overrides are keyed by field name so producers that only know a name at
//! runtime can still express an update. Names are checked against the
//! record's schema before anything is built; a mismatch is a caller bug and
//! comes back as an error instead of being dropped.
//!
//! [`ReuseInfo`]: super::ReuseInfo

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ReuseError, ReuseResult};

use super::{SourceType, SpdxExpression};

const EXPRESSIONS_KIND: &str = "a set of SPDX expressions";
const LINES_KIND: &str = "a set of lines";
const PATH_KIND: &str = "an optional path";
const SOURCE_KIND: &str = "an optional source type";

/// The fields of a [`ReuseInfo`](super::ReuseInfo)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// `spdx_expressions`
    SpdxExpressions,
    /// `copyright_lines`
    CopyrightLines,
    /// `contributor_lines`
    ContributorLines,
    /// `source_path`
    SourcePath,
    /// `source_type`
    SourceType,
}

impl Field {
    /// Every field, in record order
    pub const ALL: [Self; 5] = [
        Self::SpdxExpressions,
        Self::CopyrightLines,
        Self::ContributorLines,
        Self::SourcePath,
        Self::SourceType,
    ];

    /// Field name as used in overrides
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SpdxExpressions => "spdx_expressions",
            Self::CopyrightLines => "copyright_lines",
            Self::ContributorLines => "contributor_lines",
            Self::SourcePath => "source_path",
            Self::SourceType => "source_type",
        }
    }

    /// Whether the field holds a set
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::SpdxExpressions | Self::CopyrightLines | Self::ContributorLines)
    }

    const fn expected_kind(self) -> &'static str {
        match self {
            Self::SpdxExpressions => EXPRESSIONS_KIND,
            Self::CopyrightLines | Self::ContributorLines => LINES_KIND,
            Self::SourcePath => PATH_KIND,
            Self::SourceType => SOURCE_KIND,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Field {
    type Err = ReuseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|field| field.name() == s).ok_or_else(|| {
            ReuseError::UnknownAttributes {
                names: vec![s.to_string()],
            }
        })
    }
}

/// A replacement value for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Value for `spdx_expressions`
    Expressions(BTreeSet<SpdxExpression>),
    /// Value for `copyright_lines` or `contributor_lines`
    Lines(BTreeSet<String>),
    /// Value for `source_path`
    Path(Option<String>),
    /// Value for `source_type`
    Source(Option<SourceType>),
}

impl FieldValue {
    /// Whether the value is non-empty (a non-empty set or a present scalar)
    ///
    /// An empty path counts as absent.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Expressions(set) => !set.is_empty(),
            Self::Lines(set) => !set.is_empty(),
            Self::Path(path) => path.as_deref().is_some_and(|path| !path.is_empty()),
            Self::Source(source) => source.is_some(),
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Expressions(_) => EXPRESSIONS_KIND,
            Self::Lines(_) => LINES_KIND,
            Self::Path(_) => PATH_KIND,
            Self::Source(_) => SOURCE_KIND,
        }
    }
}

/// Field replacements keyed by field name
///
/// # Examples
///
/// ```
/// use reuse::{FieldValue, Overrides, SourceType};
///
/// let overrides = Overrides::new()
///     .copyright_lines(["2021 Mr X"])
///     .source_type(Some(SourceType::DotLicenseFile));
/// assert_eq!(overrides.len(), 2);
///
/// // Names unknown to the record are kept and rejected later
/// let bad = Overrides::new().set("licence", FieldValue::Path(None));
/// assert!(bad.contains("licence"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    values: BTreeMap<String, FieldValue>,
}

/// What a rebuilt record does with one field
#[derive(Debug, Default)]
pub(super) enum Slot<T> {
    /// Not overridden; carry the current value
    #[default]
    Keep,
    /// Overridden with an empty value or a scalar
    Replace(T),
    /// Overridden with a non-empty set
    Extend(T),
}

impl<T> Slot<T> {
    const fn new(value: T, extends: bool) -> Self {
        if extends {
            Self::Extend(value)
        } else {
            Self::Replace(value)
        }
    }

    /// The overriding value, or a clone of `current` when not overridden
    pub(super) fn replace_or(self, current: &T) -> T
    where
        T: Clone,
    {
        match self {
            Self::Keep => current.clone(),
            Self::Replace(value) | Self::Extend(value) => value,
        }
    }
}

impl<T: Ord + Clone> Slot<BTreeSet<T>> {
    /// Like [`replace_or`](Self::replace_or), but a non-empty set is unioned
    /// with `current`
    pub(super) fn union_or(self, current: &BTreeSet<T>) -> BTreeSet<T> {
        match self {
            Self::Keep => current.clone(),
            Self::Replace(set) => set,
            Self::Extend(mut set) => {
                set.extend(current.iter().cloned());
                set
            }
        }
    }
}

/// Overrides checked against the record schema, one slot per field
#[derive(Debug, Default)]
pub(super) struct Resolved {
    pub(super) spdx_expressions: Slot<BTreeSet<SpdxExpression>>,
    pub(super) copyright_lines: Slot<BTreeSet<String>>,
    pub(super) contributor_lines: Slot<BTreeSet<String>>,
    pub(super) source_path: Slot<Option<String>>,
    pub(super) source_type: Slot<Option<SourceType>>,
}

impl Overrides {
    /// Create an empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a field by name
    ///
    /// A later value for the same name replaces the earlier one.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Override `spdx_expressions`
    #[must_use]
    pub fn spdx_expressions<I, E>(self, expressions: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<SpdxExpression>,
    {
        let set = expressions.into_iter().map(Into::into).collect();
        self.set(Field::SpdxExpressions.name(), FieldValue::Expressions(set))
    }

    /// Override `copyright_lines`
    #[must_use]
    pub fn copyright_lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = lines.into_iter().map(Into::into).collect();
        self.set(Field::CopyrightLines.name(), FieldValue::Lines(set))
    }

    /// Override `contributor_lines`
    #[must_use]
    pub fn contributor_lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = lines.into_iter().map(Into::into).collect();
        self.set(Field::ContributorLines.name(), FieldValue::Lines(set))
    }

    /// Override `source_path`
    #[must_use]
    pub fn source_path<S: Into<String>>(self, path: Option<S>) -> Self {
        self.set(Field::SourcePath.name(), FieldValue::Path(path.map(Into::into)))
    }

    /// Override `source_type`
    #[must_use]
    pub fn source_type(self, source_type: Option<SourceType>) -> Self {
        self.set(Field::SourceType.name(), FieldValue::Source(source_type))
    }

    /// Number of overridden names
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is overridden
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `name` is overridden
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over overridden names and their values, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Check every name and value kind, then sort values into field slots
    ///
    /// Unknown names are all reported together, before any kind check. Only
    /// a non-empty value for a set field is marked for extending.
    pub(super) fn resolve(self) -> ReuseResult<Resolved> {
        let unknown: Vec<String> = self
            .values
            .keys()
            .filter(|name| name.parse::<Field>().is_err())
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(ReuseError::UnknownAttributes { names: unknown });
        }

        let mut resolved = Resolved::default();
        for (name, value) in self.values {
            let field: Field = name.parse()?;
            let extends = field.is_set() && value.is_truthy();
            match (field, value) {
                (Field::SpdxExpressions, FieldValue::Expressions(set)) => {
                    resolved.spdx_expressions = Slot::new(set, extends);
                }
                (Field::CopyrightLines, FieldValue::Lines(set)) => {
                    resolved.copyright_lines = Slot::new(set, extends);
                }
                (Field::ContributorLines, FieldValue::Lines(set)) => {
                    resolved.contributor_lines = Slot::new(set, extends);
                }
                (Field::SourcePath, FieldValue::Path(path)) => {
                    resolved.source_path = Slot::new(path, extends);
                }
                (Field::SourceType, FieldValue::Source(source)) => {
                    resolved.source_type = Slot::new(source, extends);
                }
                (field, value) => {
                    return Err(ReuseError::MismatchedAttribute {
                        name,
                        expected: field.expected_kind(),
                        actual: value.kind(),
                    });
                }
            }
        }
        Ok(resolved)
    }
}
