//! reuse - licensing data model and path classification for REUSE-style
//! compliance checking
//!
//! This library holds the facts a compliance scan collects about a project's
//! files and the rules deciding which filesystem entries are worth scanning.
//! It performs no I/O: walkers, extractors and report renderers live elsewhere
//! and talk to this crate through [`ReuseInfo`] and the classifier predicates.
//!
//! # Examples
//!
//! ```
//! use reuse::{Overrides, ReuseInfo, SourceType, is_ignored_file};
//!
//! assert!(is_ignored_file("LICENSE.txt"));
//! assert!(!is_ignored_file("main.rs"));
//!
//! let header = ReuseInfo::default()
//!     .with_copyright_lines(["2017 Jane Doe"])
//!     .with_source_type(SourceType::FileHeader);
//! let merged = header
//!     .copy_union(Overrides::new().copyright_lines(["2021 Mr X"]))
//!     .unwrap();
//! assert_eq!(merged.copyright_lines().len(), 2);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the REUSE specification these rules follow
pub const REUSE_SPEC_VERSION: &str = "3.0";

pub mod config;
pub mod core;
pub mod error;
pub mod paths;

pub use crate::config::Settings;
pub use crate::core::models::{Field, FieldValue, Overrides, ReuseInfo, SourceType, SpdxExpression};
pub use crate::core::services::{
    Classifier, FileClass, classify_file, is_ignored_directory, is_ignored_file,
    is_ignored_parent_for_subprojects, is_spdx_metadata_file, license_sidecar_target,
    source_type_for,
};
pub use crate::error::{ReuseError, ReuseResult};
