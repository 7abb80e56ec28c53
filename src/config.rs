//! Scan settings
//!
//! Options a caller chooses once per project and hands to the [`Classifier`].
//! Settings are plain TOML:
//!
//! ```toml
//! include_meson_subprojects = true
//! ```
//!
//! Missing keys fall back to their defaults, so an empty document is valid.
//!
//! [`Classifier`]: crate::core::services::Classifier

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ReuseError, ReuseResult};

/// Project-level scan settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Scan directories nested under a `subprojects` directory
    ///
    /// Off by default: vendored Meson subprojects carry their own licensing.
    #[serde(default)]
    pub include_meson_subprojects: bool,
}

impl Settings {
    /// Parse settings from a TOML document
    pub fn from_toml_str(content: &str) -> ReuseResult<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| ReuseError::Config(e.to_string()))?;
        debug!("loaded settings: {settings:?}");
        Ok(settings)
    }

    /// Render settings as a TOML document
    pub fn to_toml_string(&self) -> ReuseResult<String> {
        toml::to_string_pretty(self).map_err(|e| ReuseError::Config(e.to_string()))
    }

    /// Enable or disable scanning of Meson subprojects
    #[must_use]
    pub const fn with_meson_subprojects(mut self, include: bool) -> Self {
        self.include_meson_subprojects = include;
        self
    }
}
