//! Serializable generator configuration.
//!
//! A [`GeneratorConfig`] lists the icon sets to generate. The default holds
//! the two built-in sets, so a bare run needs no configuration file. A JSON
//! file can replace the defaults:
//!
//! ```json
//! {
//!   "sets": [
//!     { "kind": "lucide", "inputDir": "lucide/icons", "output": "dist/lucide.tsx" },
//!     { "kind": "simple", "inputDir": "simple-icons/icons", "output": "dist/simple.tsx" }
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use icongen::{GeneratorConfig, IconSetKind};
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.sets.len(), 2);
//!
//! let json = config.to_json().unwrap();
//! let restored = GeneratorConfig::from_json(&json).unwrap();
//! assert_eq!(restored.sets[1].kind, IconSetKind::Simple);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::emit::{IconTemplate, Lucide, Simple};
use crate::error::{Error, Result};

// ============================================================================
// IconSetKind
// ============================================================================

/// The icon set conventions the generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum IconSetKind {
    /// Lucide outline icons, exported as `<Name>Icon`.
    Lucide,
    /// Simple Icons brand logos, exported as `Brand<Name>`.
    Simple,
}

impl IconSetKind {
    /// Returns the template used to render this kind of set.
    pub fn template(self) -> &'static dyn IconTemplate {
        match self {
            Self::Lucide => &Lucide,
            Self::Simple => &Simple,
        }
    }

    /// Returns the name used in JSON configs and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lucide => "lucide",
            Self::Simple => "simple",
        }
    }
}

impl fmt::Display for IconSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// IconSetConfig
// ============================================================================

/// One icon set: where its SVGs live and where its document goes.
///
/// Relative paths are resolved against the generator's root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSetConfig {
    /// Convention the set's SVGs follow.
    pub kind: IconSetKind,

    /// Directory scanned (non-recursively) for `.svg` files.
    pub input_dir: PathBuf,

    /// Generated TSX file.
    pub output: PathBuf,
}

impl IconSetConfig {
    /// Creates a set config from its kind and paths.
    pub fn new(
        kind: IconSetKind,
        input_dir: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind,
            input_dir: input_dir.into(),
            output: output.into(),
        }
    }

    /// The upstream Lucide checkout layout.
    pub fn lucide() -> Self {
        Self::new(IconSetKind::Lucide, "lucide/icons", "dist/lucide.tsx")
    }

    /// The upstream Simple Icons checkout layout.
    pub fn simple() -> Self {
        Self::new(IconSetKind::Simple, "simple-icons/icons", "dist/simple.tsx")
    }
}

// ============================================================================
// GeneratorConfig
// ============================================================================

/// The full list of icon sets to generate, in run order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Icon sets, generated in this order.
    pub sets: Vec<IconSetConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sets: vec![IconSetConfig::lucide(), IconSetConfig::simple()],
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration with both built-in sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the sets whose kind is listed. An empty list keeps all.
    pub fn retain_kinds(mut self, kinds: &[IconSetKind]) -> Self {
        if !kinds.is_empty() {
            self.sets.retain(|set| kinds.contains(&set.kind));
        }
        self
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the configuration to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
