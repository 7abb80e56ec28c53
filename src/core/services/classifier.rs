//! Path classification - decides which entries a scan looks at
//!
//! Every predicate here looks at the final path segment only (a directory or
//! file name, never a full path) and is total: any string, including `""`,
//! gets an answer. Rules are anchored and checked in order until one matches.
//!
//! | Predicate                               | Matches                                   |
//! |-----------------------------------------|-------------------------------------------|
//! | [`is_ignored_directory`]                | `.git`, `.hg`, `LICENSES`, `.reuse`       |
//! | [`is_ignored_parent_for_subprojects`]   | `subprojects`                             |
//! | [`is_ignored_file`]                     | `LICENSE*`, `COPYING*`, `*.license`, ...  |
//! | [`is_spdx_metadata_file`]               | `*.spdx`, `*.spdx.{rdf,json,xml,yml,yaml}`|
//!
//! # Examples
//!
//! ```
//! use reuse::{FileClass, classify_file, is_ignored_directory, is_ignored_file};
//!
//! assert!(is_ignored_directory(".git"));
//! assert!(is_ignored_file("COPYING.LESSER"));
//! assert!(is_ignored_file("sbom.spdx.json"));
//! assert_eq!(classify_file("logo.png.license"), FileClass::LicenseSidecar);
//! assert_eq!(classify_file("main.rs"), FileClass::Scannable);
//! ```

use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::core::models::SourceType;
use crate::paths::{
    GIT_DIR, GITKEEP_FILE, HG_DIR, HGTAGS_FILE, LICENSE_SUFFIX, LICENSES_DIR,
    MESON_SUBPROJECTS_DIR, REUSE_DIR,
};

/// A named, anchored match rule
#[derive(Debug)]
struct Rule {
    name: &'static str,
    regex: Regex,
}

impl Rule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("built-in classifier pattern is valid"),
        }
    }

    /// Rule matching exactly `name`
    fn exact(name: &'static str) -> Self {
        Self::new(name, &format!("^{}$", regex::escape(name)))
    }
}

static IGNORE_DIR_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::exact(GIT_DIR),
        Rule::exact(HG_DIR),
        Rule::exact(LICENSES_DIR),
        Rule::exact(REUSE_DIR),
    ]
});

static IGNORE_SUBPROJECT_PARENT_RULES: LazyLock<Vec<Rule>> =
    LazyLock::new(|| vec![Rule::exact(MESON_SUBPROJECTS_DIR)]);

static IGNORE_FILE_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new("LICENSE*", r"^LICENSE"),
        Rule::new("COPYING*", r"^COPYING"),
        // A .git file happens in submodules
        Rule::exact(GIT_DIR),
        Rule::exact(GITKEEP_FILE),
        Rule::exact(HGTAGS_FILE),
        Rule::new("*.license", &format!(r".*{}$", regex::escape(LICENSE_SUFFIX))),
        // License identifiers that look like license texts
        Rule::new("CAL-1.0", r"^CAL-1\.0(-Combined-Work-Exception)?(\..+)?$"),
        Rule::new("SHL-2.1", r"^SHL-2\.1(\..+)?$"),
    ]
});

static SPDX_METADATA_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new("*.spdx", r".*\.spdx$"),
        Rule::new("*.spdx.<format>", r".*\.spdx\.(?i:rdf|json|xml|ya?ml)$"),
    ]
});

/// Whether any rule matches `name`; the first hit is logged at trace level
fn matches_any(kind: &str, rules: &[Rule], name: &str) -> bool {
    rules
        .iter()
        .find(|rule| rule.regex.is_match(name))
        .inspect(|rule| trace!("{kind} {name:?} matched rule {}", rule.name))
        .is_some()
}

/// Check if a directory is never descended into
///
/// Version control metadata, license texts and the project metadata directory
/// are skipped whatever they contain.
#[must_use]
pub fn is_ignored_directory(name: &str) -> bool {
    matches_any("directory", &IGNORE_DIR_RULES, name)
}

/// Check if a directory is the parent of vendored Meson subprojects
///
/// This is the name test only. Deciding which directories below a match are
/// suppressed (direct children or any depth) is up to the caller.
#[must_use]
pub fn is_ignored_parent_for_subprojects(name: &str) -> bool {
    matches_any("directory", &IGNORE_SUBPROJECT_PARENT_RULES, name)
}

/// Check if a file is excluded from compliance scanning
///
/// Covers license texts, VCS bookkeeping files, `.license` sidecars and every
/// file [`is_spdx_metadata_file`] accepts.
#[must_use]
pub fn is_ignored_file(name: &str) -> bool {
    matches_any("file", &IGNORE_FILE_RULES, name) || is_spdx_metadata_file(name)
}

/// Check if a file is itself an SPDX document
///
/// Follows the SPDX standard data format naming: `*.spdx`, or `*.spdx.` plus
/// `rdf`, `json`, `xml`, `yml` or `yaml` in any case.
#[must_use]
pub fn is_spdx_metadata_file(name: &str) -> bool {
    matches_any("file", &SPDX_METADATA_RULES, name)
}

/// Name of the file a `<target>.license` sidecar describes
///
/// Returns `None` for names without the suffix and for a bare `.license`.
#[must_use]
pub fn license_sidecar_target(name: &str) -> Option<&str> {
    name.strip_suffix(LICENSE_SUFFIX).filter(|target| !target.is_empty())
}

/// Where a file should be routed by the extraction pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileClass {
    /// A structured SPDX document; a metadata source, not a header carrier
    SpdxDocument,
    /// A `<target>.license` sidecar holding facts for its target
    LicenseSidecar,
    /// Excluded from scanning altogether
    Ignored,
    /// An ordinary file whose header should be scanned
    Scannable,
}

impl FileClass {
    /// Whether the file is skipped by header scanning
    ///
    /// Agrees with [`is_ignored_file`] for every name.
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        !matches!(self, Self::Scannable)
    }
}

impl std::fmt::Display for FileClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpdxDocument => write!(f, "spdx document"),
            Self::LicenseSidecar => write!(f, "license sidecar"),
            Self::Ignored => write!(f, "ignored"),
            Self::Scannable => write!(f, "scannable"),
        }
    }
}

/// Route a file name to the extractor that should read it
#[must_use]
pub fn classify_file(name: &str) -> FileClass {
    if is_spdx_metadata_file(name) {
        FileClass::SpdxDocument
    } else if license_sidecar_target(name).is_some() {
        FileClass::LicenseSidecar
    } else if is_ignored_file(name) {
        FileClass::Ignored
    } else {
        FileClass::Scannable
    }
}

/// Provenance a record read from this file should carry
///
/// Manifest provenance is never inferred from a file name; the manifest
/// parser tags its own records.
#[must_use]
pub fn source_type_for(name: &str) -> Option<SourceType> {
    match classify_file(name) {
        FileClass::LicenseSidecar => Some(SourceType::DotLicenseFile),
        FileClass::Scannable => Some(SourceType::FileHeader),
        FileClass::SpdxDocument | FileClass::Ignored => None,
    }
}

/// Classifier bound to a project's [`Settings`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    settings: Settings,
}

impl Classifier {
    /// Create a classifier for the given settings
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Settings this classifier applies
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Check if a directory is never descended into
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn ignores_directory(&self, name: &str) -> bool {
        is_ignored_directory(name)
    }

    /// Check if subprojects below a directory with this name are skipped
    ///
    /// Always false when the settings include Meson subprojects.
    #[must_use]
    pub fn ignores_subprojects_under(&self, name: &str) -> bool {
        !self.settings.include_meson_subprojects && is_ignored_parent_for_subprojects(name)
    }

    /// Check if a file is excluded from compliance scanning
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn ignores_file(&self, name: &str) -> bool {
        is_ignored_file(name)
    }

    /// Route a file name to the extractor that should read it
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn classify(&self, name: &str) -> FileClass {
        classify_file(name)
    }
}
