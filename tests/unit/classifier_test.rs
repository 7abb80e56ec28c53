//! Tests for path classification
//!
//! The predicates look at one path segment and decide whether a scan should
//! descend into it, skip it, or route it to a particular extractor.

use std::ffi::OsStr;
use std::path::Path;

use reuse::paths::{DEP5_FILE, dep5_path, sidecar_name};
use reuse::{
    Classifier, FileClass, Settings, SourceType, classify_file, is_ignored_directory,
    is_ignored_file, is_ignored_parent_for_subprojects, is_spdx_metadata_file,
    license_sidecar_target, source_type_for,
};

use crate::common::init_logging;

// =============================================================================
// Directories
// =============================================================================

#[test]
fn ignores_vcs_and_metadata_directories() {
    init_logging();
    for name in [".git", ".hg", "LICENSES", ".reuse"] {
        assert!(is_ignored_directory(name), "{name} should be ignored");
    }
}

#[test]
fn directory_names_must_match_exactly() {
    for name in ["src", ".github", "LICENSES-old", "licenses", "my.git", ".reuse2"] {
        assert!(!is_ignored_directory(name), "{name} should not be ignored");
    }
}

#[test]
fn subprojects_parent_is_name_match_only() {
    assert!(is_ignored_parent_for_subprojects("subprojects"));
    assert!(!is_ignored_parent_for_subprojects("subprojects2"));
    assert!(!is_ignored_parent_for_subprojects("Subprojects"));
    assert!(!is_ignored_directory("subprojects"));
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn ignores_license_texts() {
    assert!(is_ignored_file("LICENSE"));
    assert!(is_ignored_file("LICENSE.txt"));
    assert!(is_ignored_file("LICENSES"));
    assert!(is_ignored_file("COPYING"));
    assert!(is_ignored_file("COPYING.LESSER"));
}

#[test]
fn license_prefix_is_anchored_and_case_sensitive() {
    assert!(!is_ignored_file("mylicense.py"));
    assert!(!is_ignored_file("license.txt"));
    assert!(!is_ignored_file("MY_LICENSE"));
    assert!(!is_ignored_file("src_COPYING"));
}

#[test]
fn ignores_vcs_bookkeeping_files() {
    assert!(is_ignored_file(".git"));
    assert!(is_ignored_file(".gitkeep"));
    assert!(is_ignored_file(".hgtags"));
    assert!(!is_ignored_file(".gitignore"));
    assert!(!is_ignored_file(".gitattributes"));
}

#[test]
fn ignores_sidecar_files() {
    assert!(is_ignored_file("foo.license"));
    assert!(is_ignored_file("logo.png.license"));
    assert!(is_ignored_file(".license"));
    assert!(!is_ignored_file("foo.license.bak"));
}

#[test]
fn ignores_legacy_identifier_files() {
    assert!(is_ignored_file("CAL-1.0"));
    assert!(is_ignored_file("CAL-1.0.txt"));
    assert!(is_ignored_file("CAL-1.0-Combined-Work-Exception"));
    assert!(is_ignored_file("CAL-1.0-Combined-Work-Exception.md"));
    assert!(is_ignored_file("SHL-2.1"));
    assert!(is_ignored_file("SHL-2.1.txt"));
    assert!(!is_ignored_file("CAL-1.0."));
    assert!(!is_ignored_file("SHL-2.0"));
}

#[test]
fn ignored_files_include_spdx_documents() {
    assert!(is_ignored_file("notice.spdx.json"));
    assert!(is_ignored_file("project.spdx"));
}

#[test]
fn ordinary_files_are_not_ignored() {
    for name in ["main.rs", "README.md", "logo.png", "Cargo.toml", "spdx.rs"] {
        assert!(!is_ignored_file(name), "{name} should be scanned");
    }
}

// =============================================================================
// SPDX documents
// =============================================================================

#[test]
fn recognizes_spdx_data_formats() {
    for name in [
        "project.spdx",
        "project.spdx.rdf",
        "project.spdx.json",
        "project.spdx.xml",
        "project.spdx.yml",
        "project.spdx.yaml",
        "project.spdx.YAML",
    ] {
        assert!(is_spdx_metadata_file(name), "{name} should be an SPDX document");
    }
}

#[test]
fn rejects_other_spdx_lookalikes() {
    for name in ["project.spdx.txt", "project.spdx.json.bak", "spdx", "project.spdx.yamll"] {
        assert!(!is_spdx_metadata_file(name), "{name} should not be an SPDX document");
    }
}

// =============================================================================
// Routing
// =============================================================================

#[test]
fn classify_routes_each_kind() {
    assert_eq!(classify_file("sbom.spdx.json"), FileClass::SpdxDocument);
    assert_eq!(classify_file("logo.png.license"), FileClass::LicenseSidecar);
    assert_eq!(classify_file("LICENSE"), FileClass::Ignored);
    assert_eq!(classify_file("main.rs"), FileClass::Scannable);
}

#[test]
fn spdx_document_wins_over_sidecar() {
    assert_eq!(classify_file("odd.spdx"), FileClass::SpdxDocument);
    assert_eq!(classify_file("LICENSE.spdx"), FileClass::SpdxDocument);
}

#[test]
fn sidecar_target_strips_suffix() {
    assert_eq!(license_sidecar_target("src/logo.png.license"), Some("src/logo.png"));
    assert_eq!(license_sidecar_target("LICENSE.license"), Some("LICENSE"));
    assert_eq!(license_sidecar_target("foo.licenses"), None);
}

#[test]
fn sidecar_name_round_trips_through_target() {
    for target in ["logo.png", "LICENSE", "src/main.rs", "archive.tar.gz"] {
        let sidecar = sidecar_name(target);
        assert_eq!(license_sidecar_target(&sidecar), Some(target));
        assert_eq!(classify_file(&sidecar), FileClass::LicenseSidecar);
        assert_eq!(source_type_for(&sidecar), Some(SourceType::DotLicenseFile));
    }
    assert_eq!(license_sidecar_target(&sidecar_name("")), None);
}

#[test]
fn manifest_lives_in_an_ignored_directory() {
    let dep5 = dep5_path();
    assert_eq!(dep5.file_name(), Some(OsStr::new(DEP5_FILE)));

    let parent = dep5.parent().and_then(Path::to_str).unwrap();
    assert!(is_ignored_directory(parent));
    assert_eq!(classify_file(DEP5_FILE), FileClass::Scannable);
}

#[test]
fn source_type_follows_route() {
    assert_eq!(source_type_for("main.rs"), Some(SourceType::FileHeader));
    assert_eq!(source_type_for("logo.png.license"), Some(SourceType::DotLicenseFile));
    assert_eq!(source_type_for("COPYING"), None);
    assert_eq!(source_type_for("sbom.spdx"), None);
}

#[test]
fn file_class_display() {
    assert_eq!(FileClass::LicenseSidecar.to_string(), "license sidecar");
    assert_eq!(FileClass::Scannable.to_string(), "scannable");
}

// =============================================================================
// Classifier with settings
// =============================================================================

#[test]
fn classifier_skips_subprojects_by_default() {
    let classifier = Classifier::default();
    assert!(classifier.ignores_subprojects_under("subprojects"));
    assert!(!classifier.ignores_subprojects_under("src"));
}

#[test]
fn classifier_can_include_subprojects() {
    let classifier = Classifier::new(Settings::default().with_meson_subprojects(true));
    assert!(!classifier.ignores_subprojects_under("subprojects"));
    assert!(classifier.settings().include_meson_subprojects);
}

#[test]
fn classifier_delegates_to_predicates() {
    let classifier = Classifier::default();
    assert!(classifier.ignores_directory(".reuse"));
    assert!(classifier.ignores_file("COPYING"));
    assert!(!classifier.ignores_file("main.rs"));
    assert_eq!(classifier.classify("a.spdx.xml"), FileClass::SpdxDocument);
}
