//! Apple iconset manifest (`Contents.json`) writing.
//!
//! The manifest is an ordered `images` list plus a fixed `info` block; Xcode
//! consumes it to map icon variants to usage contexts. Output is
//! deterministic and order-preserving.

use crate::error::{ErrorExt, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Manifest file name inside an `.appiconset` directory.
pub const MANIFEST_NAME: &str = "Contents.json";

/// One `images` entry: a (size, idiom, filename, scale) record.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    /// Nominal point size, e.g. "20x20" or "83.5x83.5"
    pub size: String,
    /// Usage-context tag, e.g. "iphone", "ios-marketing", "mac"
    pub idiom: &'static str,
    /// Image file name relative to the iconset directory
    pub filename: String,
    /// Scale tag, e.g. "2x"
    pub scale: String,
}

#[derive(Serialize)]
struct ManifestInfo {
    version: u32,
    author: &'static str,
}

#[derive(Serialize)]
struct Contents<'a> {
    images: &'a [ManifestEntry],
    info: ManifestInfo,
}

/// Write `Contents.json` into `iconset_dir`, preserving entry order.
pub async fn write_contents(iconset_dir: &Path, images: &[ManifestEntry]) -> Result<PathBuf> {
    let contents = Contents {
        images,
        info: ManifestInfo {
            version: 1,
            author: "xcode",
        },
    };

    let json = serde_json::to_string_pretty(&contents)?;
    let path = iconset_dir.join(MANIFEST_NAME);
    tokio::fs::write(&path, json)
        .await
        .fs_context("writing iconset manifest", &path)?;

    log::debug!("wrote manifest with {} entries to {}", images.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_serialize_in_record_order() {
        let entry = ManifestEntry {
            size: "20x20".into(),
            idiom: "iphone",
            filename: "icon_20x20@2x.png".into(),
            scale: "2x".into(),
        };
        let json = serde_json::to_string(&entry).expect("serialize");
        assert_eq!(
            json,
            r#"{"size":"20x20","idiom":"iphone","filename":"icon_20x20@2x.png","scale":"2x"}"#
        );
    }

    #[test]
    fn info_block_is_fixed() {
        let contents = Contents {
            images: &[],
            info: ManifestInfo {
                version: 1,
                author: "xcode",
            },
        };
        let json = serde_json::to_string(&contents).expect("serialize");
        assert_eq!(json, r#"{"images":[],"info":{"version":1,"author":"xcode"}}"#);
    }
}
