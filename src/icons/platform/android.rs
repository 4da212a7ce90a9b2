//! Android launcher icon generation.
//!
//! One `ic_launcher.png` per mipmap density directory. Android keeps no
//! manifest; the launcher resolves icons by directory name.

use super::{Platform, PlatformReport, ProjectLayout};
use crate::error::Result;
use crate::icons::resize::{SourceIcon, save_png};

/// Launcher icon file name inside each density directory.
pub const LAUNCHER_FILENAME: &str = "ic_launcher.png";

/// Density directory names and their launcher icon pixel sizes.
pub const DENSITIES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Generate the Android launcher icon set.
///
/// Returns `None` (skip) when the project has no Android resource directory.
pub async fn generate(icon: &SourceIcon, layout: &ProjectLayout) -> Result<Option<PlatformReport>> {
    let res_dir = layout.android_res_dir();
    if !res_dir.exists() {
        log::warn!("skipping Android icons: {} does not exist", res_dir.display());
        return Ok(None);
    }

    let mut files = Vec::with_capacity(DENSITIES.len());
    for (density, size) in DENSITIES {
        let path = res_dir.join(density).join(LAUNCHER_FILENAME);
        let resized = icon.resized(size).await?;
        save_png(resized, &path).await?;
        log::debug!("wrote {}x{} launcher icon to {}", size, size, path.display());
        files.push(path);
    }

    Ok(Some(PlatformReport {
        platform: Platform::Android,
        files,
        manifest: None,
    }))
}
