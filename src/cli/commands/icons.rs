//! Icons command implementation.
//!
//! Drives the icon pipeline: load the source image once, generate every
//! platform icon set present in the project.

use crate::cli::OutputManager;
use crate::error::{Error, Result};
use crate::icons::platform::ProjectLayout;
use crate::icons::{self, SourceIcon};
use std::path::Path;

/// Execute icons command
pub(super) async fn execute_icons(
    source: &Path,
    project: Option<&Path>,
    output: &OutputManager,
) -> Result<i32> {
    if !source.exists() {
        return Err(Error::SourceNotFound(source.to_path_buf()));
    }

    let layout = match project {
        Some(root) => ProjectLayout::at(root),
        None => ProjectLayout::detect()?,
    };

    let _ = output.progress(&format!("Loading {}", source.display()));
    let icon = SourceIcon::load(source).await?;

    let (width, height) = icon.dimensions();
    if width != height {
        let _ = output.warn(&format!(
            "source image is {width}x{height}, not square; icons will be distorted"
        ));
    }

    let reports = icons::generate_all(&icon, &layout).await?;

    for report in &reports {
        let manifest_note = if report.manifest.is_some() {
            " + Contents.json"
        } else {
            ""
        };
        let _ = output.println(&format!(
            "  {}: {} icons{}",
            report.platform.label(),
            report.files.len(),
            manifest_note
        ));
    }

    let total: usize = reports.iter().map(|r| r.files.len()).sum();
    let _ = output.success(&format!(
        "Generated {} icons into {}",
        total,
        layout.root().display()
    ));

    Ok(0)
}
