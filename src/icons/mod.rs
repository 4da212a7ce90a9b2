//! The icon pipeline: one square source image in, full platform icon sets out.
//!
//! The source image is decoded once and shared immutably; every output is an
//! independent derived raster. Each platform generator checks for its
//! resource directory and skips (with a warning) when the project does not
//! target that platform.
//!
//! | Platform | Output | Manifest |
//! |----------|--------|----------|
//! | Android | `mipmap-*/ic_launcher.png` (48-192 px) | none |
//! | iOS | `AppIcon.appiconset/icon_WxH@Sx.png` | `Contents.json` |
//! | macOS | `AppIcon.appiconset/icon_WxH[@2x].png`, rounded corners | `Contents.json` |

pub mod manifest;
pub mod platform;
pub mod resize;
pub mod rounded;

pub use resize::SourceIcon;

use crate::error::{Error, Result};
use platform::{PlatformReport, ProjectLayout};

/// Generate every platform icon set present in the project.
///
/// Returns one report per generated platform, in a fixed order (Android,
/// iOS, macOS). Fails if none of the platform resource directories exist,
/// so a mistyped project path cannot silently succeed.
pub async fn generate_all(icon: &SourceIcon, layout: &ProjectLayout) -> Result<Vec<PlatformReport>> {
    let mut reports = Vec::new();

    if let Some(report) = platform::android::generate(icon, layout).await? {
        reports.push(report);
    }
    if let Some(report) = platform::ios::generate(icon, layout).await? {
        reports.push(report);
    }
    if let Some(report) = platform::macos::generate(icon, layout).await? {
        reports.push(report);
    }

    if reports.is_empty() {
        return Err(Error::NoPlatformsFound(layout.root().to_path_buf()));
    }

    Ok(reports)
}
