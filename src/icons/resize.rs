//! Source image loading and high-quality resizing.
//!
//! Decoding and resizing are CPU-bound, so both run under `spawn_blocking`;
//! the decoded pixels are shared across generators via `Arc`.

use crate::error::{Error, ErrorExt, Result};
use image::{DynamicImage, ImageFormat, RgbaImage, imageops};
use std::path::Path;
use std::sync::Arc;
use tokio::task;

/// A decoded RGBA source image, shared immutably between platform generators.
///
/// The input is assumed square; no aspect-ratio correction is performed.
#[derive(Debug, Clone)]
pub struct SourceIcon {
    pixels: Arc<RgbaImage>,
}

impl SourceIcon {
    /// Load and decode the source image as RGBA.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SourceNotFound(path.to_path_buf()));
        }

        let owned = path.to_path_buf();
        let img = task::spawn_blocking(move || image::open(&owned))
            .await
            .map_err(|e| Error::GenericError(format!("image decode task failed: {e}")))??;

        log::debug!(
            "loaded source image {}x{} from {}",
            img.width(),
            img.height(),
            path.display()
        );

        Ok(Self {
            pixels: Arc::new(img.to_rgba8()),
        })
    }

    /// Source dimensions in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixels.width(), self.pixels.height())
    }

    /// Resize to exactly `size`x`size` pixels.
    ///
    /// Uses Lanczos3 filtering, which preserves sharp edges and minimizes
    /// artifacts when downscaling.
    pub async fn resized(&self, size: u32) -> Result<RgbaImage> {
        let src = Arc::clone(&self.pixels);
        task::spawn_blocking(move || {
            imageops::resize(&*src, size, size, imageops::FilterType::Lanczos3)
        })
        .await
        .map_err(|e| Error::GenericError(format!("image resize task failed: {e}")))
    }
}

/// Encode an RGBA buffer as PNG and write it, creating parent directories.
///
/// Encoding happens into an in-memory buffer so the file write itself stays
/// asynchronous.
pub async fn save_png(pixels: RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .fs_context("creating icon directory", parent)?;
    }

    let img = DynamicImage::ImageRgba8(pixels);
    let mut buffer = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)?;

    tokio::fs::write(path, buffer.into_inner())
        .await
        .fs_context("saving icon", path)?;

    Ok(())
}
