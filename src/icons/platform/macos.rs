//! macOS app icon generation.
//!
//! Each variant is resized to the display region, then composited onto a
//! transparent canvas with rounded-corner clipping to match the macOS icon
//! convention. Written into `AppIcon.appiconset` with a `Contents.json`
//! manifest.

use super::{Platform, PlatformReport, ProjectLayout};
use crate::error::{Error, Result};
use crate::icons::manifest::{self, ManifestEntry};
use crate::icons::resize::{SourceIcon, save_png};
use crate::icons::rounded;
use crate::utils::fs;
use tokio::task;

/// Nominal point sizes; each ships at @1x and @2x.
pub const SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

const SCALES: [u32; 2] = [1, 2];

/// Fraction of the canvas left as transparent padding on each side.
pub const PADDING_RATIO: f64 = 0.1;

/// Corner radius as a fraction of the display region.
pub const CORNER_RATIO: f64 = 0.2;

fn filename(size: u32, scale: u32) -> String {
    if scale == 2 {
        format!("icon_{size}x{size}@2x.png")
    } else {
        format!("icon_{size}x{size}.png")
    }
}

/// Generate the macOS app iconset and its manifest.
///
/// Returns `None` (skip) when the project has no macOS asset catalog.
pub async fn generate(icon: &SourceIcon, layout: &ProjectLayout) -> Result<Option<PlatformReport>> {
    let assets = layout.macos_assets_dir();
    if !assets.exists() {
        log::warn!("skipping macOS icons: {} does not exist", assets.display());
        return Ok(None);
    }

    let iconset = layout.macos_appiconset();
    fs::create_dir_all(&iconset, false).await?;

    let mut files = Vec::new();
    let mut entries = Vec::new();

    for size in SIZES {
        for scale in SCALES {
            let px = size * scale;
            let padding = (f64::from(px) * PADDING_RATIO) as u32;
            let display = px - 2 * padding;

            let resized = icon.resized(display).await?;
            let composed = task::spawn_blocking(move || {
                rounded::round_corners_centered(resized, px, padding, CORNER_RATIO)
            })
            .await
            .map_err(|e| Error::GenericError(format!("icon compositing task failed: {e}")))?;

            let name = filename(size, scale);
            let path = iconset.join(&name);
            save_png(composed, &path).await?;
            log::debug!("wrote {}px rounded icon to {}", px, path.display());

            entries.push(ManifestEntry {
                size: format!("{size}x{size}"),
                idiom: "mac",
                filename: name,
                scale: format!("{scale}x"),
            });
            files.push(path);
        }
    }

    let manifest_path = manifest::write_contents(&iconset, &entries).await?;

    Ok(Some(PlatformReport {
        platform: Platform::Macos,
        files,
        manifest: Some(manifest_path),
    }))
}
