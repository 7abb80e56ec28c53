//! Provenance of licensing facts

use serde::{Deserialize, Serialize};

/// Kind of source a [`ReuseInfo`](super::ReuseInfo) was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    /// A `<target>.license` sidecar file
    DotLicenseFile,
    /// The comment header of the target file itself
    FileHeader,
    /// The project manifest (`.reuse/dep5`)
    ManifestFile,
}

impl SourceType {
    /// Every variant, in declaration order
    pub const ALL: [Self; 3] = [Self::DotLicenseFile, Self::FileHeader, Self::ManifestFile];

    /// Stable machine key, as used by serde
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::DotLicenseFile => "dot-license-file",
            Self::FileHeader => "file-header",
            Self::ManifestFile => "manifest-file",
        }
    }

    /// Human-readable description shown in reports
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::DotLicenseFile => ".license file",
            Self::FileHeader => "file header",
            Self::ManifestFile => ".reuse/dep5 file",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

impl std::str::FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.key() == wanted || t.description().to_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid source type: {s}. Use: dot-license-file, file-header, manifest-file"
                )
            })
    }
}
