//! macOS DMG disk image creation.
//!
//! Thin orchestration over the external `create-dmg` tool: validate (or
//! build and locate) the `.app` bundle, then invoke the tool with a fixed
//! drag-to-install layout. The resulting DMG lands next to the bundle as
//! `{AppName}.dmg`.

use crate::error::{Context, Error, ErrorExt, Result, path_to_str};
use std::path::{Path, PathBuf};
use tokio::fs::remove_file;
use tokio::process::Command;

/// Relative path from a Flutter project root to the macOS release products.
pub const RELEASE_PRODUCTS_DIR: &str = "build/macos/Build/Products/Release";

/// Resolve and validate a user-supplied `.app` bundle path.
///
/// The path is canonicalized so the DMG is written next to the real bundle
/// even when a relative path is given.
pub async fn validate_app_bundle(path: &Path) -> Result<PathBuf> {
    let resolved = tokio::fs::canonicalize(path)
        .await
        .fs_context("resolving app bundle path", path)?;

    if resolved.extension().and_then(|e| e.to_str()) != Some("app") {
        return Err(Error::NotAnAppBundle(resolved));
    }

    Ok(resolved)
}

/// Build the macOS app in release mode and locate the produced bundle.
pub async fn build_and_locate_app(project_root: &Path) -> Result<PathBuf> {
    let flutter = which::which("flutter").map_err(|error| Error::ToolNotFound {
        tool: "flutter",
        error,
    })?;

    log::info!("building macOS app in {}", project_root.display());
    let output = Command::new(flutter)
        .args(["build", "macos", "--release"])
        .current_dir(project_root)
        .output()
        .await
        .map_err(|error| Error::CommandFailed {
            command: "flutter build macos --release".into(),
            error,
        })?;

    if !output.status.success() {
        return Err(Error::ToolFailed {
            tool: "flutter",
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    locate_app_bundle(&project_root.join(RELEASE_PRODUCTS_DIR)).await
}

/// Find the `.app` bundle in a build products directory.
pub async fn locate_app_bundle(products_dir: &Path) -> Result<PathBuf> {
    let mut entries = tokio::fs::read_dir(products_dir)
        .await
        .fs_context("reading build products directory", products_dir)?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading build products directory", products_dir)?
    {
        let path = entry.path();
        if path.is_dir() && path.extension().and_then(|e| e.to_str()) == Some("app") {
            log::debug!("found app bundle: {}", path.display());
            return Ok(path);
        }
    }

    Err(Error::AppBundleNotFound(products_dir.to_path_buf()))
}

/// Create `{AppName}.dmg` next to the bundle via `create-dmg`.
///
/// Layout is fixed: 600x400 window, 100px icons, the app at (200, 200) with
/// its extension hidden, and an Applications drop-link at (400, 200).
pub async fn create_dmg(app_bundle: &Path) -> Result<PathBuf> {
    let create_dmg = which::which("create-dmg").map_err(|error| Error::ToolNotFound {
        tool: "create-dmg",
        error,
    })?;

    let volume_name = app_bundle
        .file_stem()
        .and_then(|s| s.to_str())
        .context("app bundle has no UTF-8 file name")?;
    let app_name = app_bundle
        .file_name()
        .and_then(|s| s.to_str())
        .context("app bundle has no UTF-8 file name")?;

    let dmg_path = app_bundle
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{volume_name}.dmg"));

    // create-dmg refuses to overwrite an existing image
    if dmg_path.exists() {
        remove_file(&dmg_path)
            .await
            .fs_context("removing stale DMG", &dmg_path)?;
    }

    log::info!("creating DMG: {}", dmg_path.display());
    let output = Command::new(create_dmg)
        .args([
            "--volname",
            volume_name,
            "--window-size",
            "600",
            "400",
            "--icon-size",
            "100",
            "--icon",
            app_name,
            "200",
            "200",
            "--hide-extension",
            app_name,
            "--app-drop-link",
            "400",
            "200",
            path_to_str(&dmg_path)?,
            path_to_str(app_bundle)?,
        ])
        .output()
        .await
        .map_err(|error| Error::CommandFailed {
            command: "create-dmg".into(),
            error,
        })?;

    if !output.status.success() {
        return Err(Error::ToolFailed {
            tool: "create-dmg",
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    log::info!("created DMG: {}", dmg_path.display());
    Ok(dmg_path)
}
