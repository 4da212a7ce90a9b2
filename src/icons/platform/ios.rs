//! iOS app icon generation.
//!
//! Writes every (size, scale) variant into `AppIcon.appiconset` together
//! with the `Contents.json` manifest Xcode expects.

use super::{Platform, PlatformReport, ProjectLayout};
use crate::error::Result;
use crate::icons::manifest::{self, ManifestEntry};
use crate::icons::resize::{SourceIcon, save_png};
use crate::utils::fs;

/// Nominal point sizes and the scale factors required for each.
///
/// 83.5 is the iPad Pro home-screen size; it only ships at @2x. 1024 is the
/// App Store marketing icon and only ships at @1x.
pub const SIZES: [(f64, &[u32]); 7] = [
    (20.0, &[1, 2, 3]),
    (29.0, &[1, 2, 3]),
    (40.0, &[1, 2, 3]),
    (60.0, &[2, 3]),
    (76.0, &[1, 2]),
    (83.5, &[2]),
    (1024.0, &[1]),
];

const MARKETING_SIZE: f64 = 1024.0;

/// Derived pixel dimension: nominal x scale, truncated.
fn pixel_size(nominal: f64, scale: u32) -> u32 {
    (nominal * f64::from(scale)) as u32
}

/// `icon_{size}x{size}@{scale}x.png`; fractional sizes keep their decimal
/// (`icon_83.5x83.5@2x.png`).
fn filename(nominal: f64, scale: u32) -> String {
    format!("icon_{nominal}x{nominal}@{scale}x.png")
}

fn idiom_for(nominal: f64) -> &'static str {
    if nominal == MARKETING_SIZE {
        "ios-marketing"
    } else {
        "iphone"
    }
}

/// Generate the iOS app iconset and its manifest.
///
/// Returns `None` (skip) when the project has no iOS asset catalog.
pub async fn generate(icon: &SourceIcon, layout: &ProjectLayout) -> Result<Option<PlatformReport>> {
    let assets = layout.ios_assets_dir();
    if !assets.exists() {
        log::warn!("skipping iOS icons: {} does not exist", assets.display());
        return Ok(None);
    }

    let iconset = layout.ios_appiconset();
    fs::create_dir_all(&iconset, false).await?;

    let mut files = Vec::new();
    let mut entries = Vec::new();

    for (nominal, scales) in SIZES {
        for &scale in scales {
            let px = pixel_size(nominal, scale);
            let name = filename(nominal, scale);
            let path = iconset.join(&name);

            let resized = icon.resized(px).await?;
            save_png(resized, &path).await?;
            log::debug!("wrote {}px app icon to {}", px, path.display());

            entries.push(ManifestEntry {
                size: format!("{nominal}x{nominal}"),
                idiom: idiom_for(nominal),
                filename: name,
                scale: format!("{scale}x"),
            });
            files.push(path);
        }
    }

    let manifest_path = manifest::write_contents(&iconset, &entries).await?;

    Ok(Some(PlatformReport {
        platform: Platform::Ios,
        files,
        manifest: Some(manifest_path),
    }))
}
