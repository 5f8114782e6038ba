//! Scan, load, render and write for each configured icon set.

use std::path::{Path, PathBuf};

use crate::config::{GeneratorConfig, IconSetConfig, IconSetKind};
use crate::emit::{render_document, write_document};
use crate::error::Result;
use crate::icon::load_all;
use crate::scan::scan_svgs;

/// Outcome of generating one icon set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Which icon set was generated.
    pub kind: IconSetKind,
    /// Number of components written.
    pub icons: usize,
    /// Path of the written document.
    pub output: PathBuf,
}

/// Generates one icon set.
///
/// Paths in `set` are resolved against `root`. All SVGs are read concurrently
/// and the document is only written once every read has succeeded.
pub async fn generate_set(root: &Path, set: &IconSetConfig) -> Result<GenerateReport> {
    let input_dir = root.join(&set.input_dir);
    let output = root.join(&set.output);

    let paths = scan_svgs(&input_dir)?;
    let icons = load_all(paths).await?;
    let document = render_document(set.kind.template(), &icons)?;
    write_document(&output, &document).await?;

    tracing::info!(
        kind = %set.kind,
        icons = icons.len(),
        output = %output.display(),
        "wrote icon components"
    );

    Ok(GenerateReport {
        kind: set.kind,
        icons: icons.len(),
        output,
    })
}

/// Generates every set in `config`, one after the other.
///
/// Stops at the first failing set. Sets already written stay on disk.
pub async fn generate(root: &Path, config: &GeneratorConfig) -> Result<Vec<GenerateReport>> {
    let mut reports = Vec::with_capacity(config.sets.len());
    for set in &config.sets {
        reports.push(generate_set(root, set).await?);
    }
    Ok(reports)
}
