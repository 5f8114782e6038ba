//! Rendering icon sets into TSX documents.
//!
//! Each icon set has an [`IconTemplate`] describing its wrapper component,
//! how exports are named and how the inner markup is pulled out of the source
//! SVG. [`render_document`] drives a template over a collection of icons.
//!
//! # Document layout
//!
//! ```text
//! <blank line>
//! <wrapper component>
//! <blank line>
//! /** ![](data:image/svg+xml;base64,...) */
//! export const <Export>: Icon = props => (
//!   <Wrapper {...props}>
//!     <inner markup>
//!   </Wrapper>
//! )
//! ... one block per icon, sorted by name ...
//! <blank line>
//! ```

pub mod lucide;
pub mod markup;
pub mod order;
pub mod simple;

pub use lucide::Lucide;
pub use order::compare_names;
pub use simple::Simple;

use std::path::Path;

use crate::error::{Error, MarkupError, Result};
use crate::icon::Icon;

// ============================================================================
// IconTemplate
// ============================================================================

/// The templating rules for one icon set convention.
pub trait IconTemplate {
    /// Name of the shared wrapper component every icon renders through.
    fn wrapper_name(&self) -> &'static str;

    /// Full definition of the wrapper component, without surrounding newlines.
    fn wrapper_definition(&self) -> &'static str;

    /// Exported component name for an icon.
    fn export_name(&self, icon_name: &str) -> String;

    /// Inner markup placed inside the wrapper for an icon's SVG source.
    fn inner_markup(&self, svg: &str) -> std::result::Result<String, MarkupError>;
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders one component block for an icon.
pub fn render_icon(template: &dyn IconTemplate, icon: &Icon) -> Result<String> {
    let export = template.export_name(&icon.name);
    if !is_identifier(&export) {
        return Err(Error::InvalidIdentifier { name: export });
    }

    let inner = template
        .inner_markup(&icon.content)
        .map_err(|source| Error::Markup {
            path: icon.source.clone(),
            source,
        })?;
    let wrapper = template.wrapper_name();

    Ok(format!(
        "\n/** ![](data:image/svg+xml;base64,{preview}) */\n\
         export const {export}: Icon = props => (\n  \
         <{wrapper} {{...props}}>\n    \
         {inner}\n  \
         </{wrapper}>\n\
         )\n",
        preview = icon.preview,
    ))
}

/// Renders a full document for an icon set.
///
/// Icons are sorted with [`compare_names`] before rendering, so the output
/// does not depend on the order they were scanned or loaded in.
pub fn render_document(template: &dyn IconTemplate, icons: &[Icon]) -> Result<String> {
    let mut sorted: Vec<&Icon> = icons.iter().collect();
    sorted.sort_by(|a, b| compare_names(&a.name, &b.name));

    let mut document = String::new();
    document.push('\n');
    document.push_str(template.wrapper_definition());
    document.push('\n');
    for icon in sorted {
        document.push_str(&render_icon(template, icon)?);
    }
    document.push('\n');
    Ok(document)
}

/// Writes a rendered document, creating the parent directory if needed.
///
/// Existing files are overwritten.
pub async fn write_document(path: &Path, document: &str) -> Result<()> {
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }
    tokio::fs::write(path, document).await.map_err(write_error)
}

/// Returns true if `name` can be used as an exported TSX binding.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let part = |c: char| c == '_' || c == '$';
    (first.is_alphabetic() || part(first)) && chars.all(|c| c.is_alphanumeric() || part(c))
}

// ============================================================================
// Tests
// ============================================================================
