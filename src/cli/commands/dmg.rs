//! Dmg command implementation.
//!
//! Packages a built macOS .app bundle into a distributable disk image.

use crate::cli::OutputManager;
use crate::dmg;
use crate::error::Result;
use std::path::Path;

/// Execute dmg command
pub(super) async fn execute_dmg(app: Option<&Path>, output: &OutputManager) -> Result<i32> {
    let app_bundle = match app {
        Some(path) => dmg::validate_app_bundle(path).await?,
        None => {
            let _ = output.progress("Building macOS app (flutter build macos --release)...");
            dmg::build_and_locate_app(Path::new(".")).await?
        }
    };

    let _ = output.progress(&format!("Creating DMG for {}", app_bundle.display()));
    let dmg_path = dmg::create_dmg(&app_bundle).await?;

    let _ = output.success(&format!("Created DMG: {}", dmg_path.display()));
    Ok(0)
}
