//! Services over the domain models
//!
//! - [`classifier`] - Which directories and files a scan should look at

pub mod classifier;

pub use classifier::{
    Classifier, FileClass, classify_file, is_ignored_directory, is_ignored_file,
    is_ignored_parent_for_subprojects, is_spdx_metadata_file, license_sidecar_target,
    source_type_for,
};
