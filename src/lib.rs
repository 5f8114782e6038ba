//! icongen: TSX icon components from SVG icon sets
//!
//! This crate scans directories of SVG icons and writes one TSX document per
//! icon set, with one exported component per icon and an inline base64
//! preview in each component's doc comment.
//!
//! Two icon set conventions are supported: Lucide outline icons and Simple
//! Icons brand logos. Each set runs through the same stages:
//!
//! 1. [`scan_svgs`] lists the `.svg` files in the set's directory.
//! 2. [`load_all`] reads them concurrently into [`Icon`] records.
//! 3. [`render_document`] sorts the icons and renders them through the set's
//!    [`IconTemplate`].
//! 4. [`write_document`] writes the result, creating the output directory.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use icongen::{GeneratorConfig, generate};
//!
//! # async fn run() -> icongen::Result<()> {
//! let reports = generate(Path::new("."), &GeneratorConfig::default()).await?;
//! for report in reports {
//!     println!("{}: {} icons -> {}", report.kind, report.icons, report.output.display());
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod emit;
mod error;
mod icon;
mod pipeline;
mod scan;

pub use config::{GeneratorConfig, IconSetConfig, IconSetKind};
pub use emit::markup::{children_after_title, reindent, root_children};
pub use emit::{
    IconTemplate, Lucide, Simple, compare_names, is_identifier, render_document, render_icon,
    write_document,
};
pub use error::{Error, MarkupError, Result};
pub use icon::{
    Icon, PREVIEW_COLOR, PREVIEW_COLOR_TOKEN, PREVIEW_SIZES, derive_name, encode_preview,
    load_all, preview_markup,
};
pub use pipeline::{GenerateReport, generate, generate_set};
pub use scan::{SVG_EXTENSION, scan_svgs};
