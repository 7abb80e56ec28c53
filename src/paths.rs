//! Reserved file and directory names
//!
//! Single source of truth for the names compliance scanning treats specially.
//! The classifier rule tables are built from these constants.
//!
//! ## Project Layout
//!
//! ```text
//! project/
//! ├── .reuse/
//! │   └── dep5                  # Manifest file for files without headers
//! ├── LICENSES/
//! │   └── MIT.txt               # License texts, never scanned
//! ├── subprojects/              # Meson vendored subprojects
//! ├── logo.png
//! └── logo.png.license          # Sidecar carrying logo.png's facts
//! ```
//!
//! Nothing here touches the filesystem; the helpers only build names.

use std::path::PathBuf;

// =============================================================================
// Directories
// =============================================================================

/// Project metadata directory
pub const REUSE_DIR: &str = ".reuse";

/// Directory holding license texts
pub const LICENSES_DIR: &str = "LICENSES";

/// Git metadata directory (a file of the same name appears in submodules)
pub const GIT_DIR: &str = ".git";

/// Mercurial metadata directory
pub const HG_DIR: &str = ".hg";

/// Parent directory of Meson subprojects
pub const MESON_SUBPROJECTS_DIR: &str = "subprojects";

// =============================================================================
// Files
// =============================================================================

/// Manifest filename inside [`REUSE_DIR`]
pub const DEP5_FILE: &str = "dep5";

/// Suffix of sidecar files
pub const LICENSE_SUFFIX: &str = ".license";

/// Placeholder git uses to keep empty directories
pub const GITKEEP_FILE: &str = ".gitkeep";

/// Mercurial tag list
pub const HGTAGS_FILE: &str = ".hgtags";

/// Relative path of the manifest file from the project root.
#[must_use]
pub fn dep5_path() -> PathBuf {
    PathBuf::from(REUSE_DIR).join(DEP5_FILE)
}

/// Name of the sidecar file carrying licensing facts for `target`.
///
/// `logo.png` becomes `logo.png.license`.
#[must_use]
pub fn sidecar_name(target: &str) -> String {
    format!("{target}{LICENSE_SUFFIX}")
}
