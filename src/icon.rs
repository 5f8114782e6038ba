//! Icon records loaded from SVG files.
//!
//! This module turns a single SVG file into an [`Icon`]: a component name
//! derived from the filename, the untouched markup, and a base64 preview used
//! in the generated documentation comment.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use futures::future::try_join_all;

use crate::error::{Error, Result};

// ============================================================================
// Preview substitutions
// ============================================================================

/// Color keyword replaced in the preview so it renders on any background.
pub const PREVIEW_COLOR_TOKEN: &str = "currentColor";

/// Fixed color substituted for [`PREVIEW_COLOR_TOKEN`].
pub const PREVIEW_COLOR: &str = "#64748b";

/// Size attributes enlarged in the preview. Only the first occurrence of each
/// is replaced.
pub const PREVIEW_SIZES: [(&str, &str); 2] = [
    (r#"width="24""#, r#"width="50px""#),
    (r#"height="24""#, r#"height="50px""#),
];

// ============================================================================
// Icon
// ============================================================================

/// A single icon ready to be rendered into a component.
///
/// Icons are transient: they are built by [`Icon::load`], consumed by the
/// emitter and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// File the icon was loaded from. Used for error reporting.
    pub source: PathBuf,

    /// PascalCase name derived from the filename, e.g. `ArrowUpCircle`.
    pub name: String,

    /// Raw SVG markup, exactly as read from disk.
    pub content: String,

    /// Base64 of the markup with the preview substitutions applied.
    pub preview: String,
}

impl Icon {
    /// Creates an icon from already-loaded markup, computing its preview.
    pub fn new(
        source: impl Into<PathBuf>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let preview = encode_preview(&content);
        Self {
            source: source.into(),
            name: name.into(),
            content,
            preview,
        }
    }

    /// Reads an SVG file and builds its icon.
    ///
    /// Fails if the filename yields no usable name, or if the file cannot be
    /// read as UTF-8 text.
    pub async fn load(path: PathBuf) -> Result<Self> {
        let name = name_from_path(&path).ok_or_else(|| Error::EmptyName { path: path.clone() })?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(source) => return Err(Error::Read { path, source }),
        };
        tracing::debug!(name = %name, path = %path.display(), "loaded icon");
        Ok(Self::new(path, name, content))
    }
}

/// Loads every path concurrently and waits for all of them.
///
/// The first failed read fails the whole batch; no partial result is returned.
/// Output order matches input order.
pub async fn load_all(paths: Vec<PathBuf>) -> Result<Vec<Icon>> {
    try_join_all(paths.into_iter().map(Icon::load)).await
}

// ============================================================================
// Naming
// ============================================================================

/// Converts a hyphenated filename stem to a PascalCase name.
///
/// Each hyphen followed by an ASCII letter or digit is dropped and that
/// character uppercased; the first character of the result is uppercased.
/// Returns `None` for an empty stem.
///
/// ```
/// assert_eq!(icongen::derive_name("arrow-up-circle").as_deref(), Some("ArrowUpCircle"));
/// assert_eq!(icongen::derive_name("github").as_deref(), Some("Github"));
/// ```
pub fn derive_name(stem: &str) -> Option<String> {
    let mut camel = String::with_capacity(stem.len());
    let mut chars = stem.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.next_if(char::is_ascii_alphanumeric) {
                camel.push(next.to_ascii_uppercase());
                continue;
            }
        }
        camel.push(c);
    }

    let mut chars = camel.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

fn name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(derive_name)
}

// ============================================================================
// Preview
// ============================================================================

/// Applies the preview color and size substitutions to SVG markup.
pub fn preview_markup(content: &str) -> String {
    let mut markup = content.replace(PREVIEW_COLOR_TOKEN, PREVIEW_COLOR);
    for (from, to) in PREVIEW_SIZES {
        markup = markup.replacen(from, to, 1);
    }
    markup
}

/// Returns the base64 preview payload for SVG markup.
pub fn encode_preview(content: &str) -> String {
    STANDARD.encode(preview_markup(content))
}

// ============================================================================
// Tests
// ============================================================================
