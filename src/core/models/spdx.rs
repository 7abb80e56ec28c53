//! Opaque SPDX license expression

use serde::{Deserialize, Serialize};

/// A license expression as produced by the expression parser
///
/// This crate never looks inside: `MIT OR Apache-2.0` is compared, hashed and
/// ordered by its text. Surrounding whitespace is dropped so the same
/// expression read from two sources lands in a set once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SpdxExpression(String);

impl SpdxExpression {
    /// Wrap an expression string
    #[must_use]
    pub fn new(expression: impl AsRef<str>) -> Self {
        Self(expression.as_ref().trim().to_string())
    }

    /// The expression text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SpdxExpression {
    fn from(expression: String) -> Self {
        Self::new(expression)
    }
}

impl From<&str> for SpdxExpression {
    fn from(expression: &str) -> Self {
        Self::new(expression)
    }
}

impl From<SpdxExpression> for String {
    fn from(expression: SpdxExpression) -> Self {
        expression.0
    }
}

impl AsRef<str> for SpdxExpression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpdxExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
