//! Per-platform icon generators and Flutter project layout.

pub mod android;
pub mod ios;
pub mod macos;

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Platforms the icon pipeline can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Android launcher icons (mipmap densities)
    Android,
    /// iOS app icons (AppIcon.appiconset)
    Ios,
    /// macOS app icons (AppIcon.appiconset, rounded corners)
    Macos,
}

impl Platform {
    /// Human-readable platform label.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Macos => "macOS",
        }
    }
}

/// Result of generating one platform's icon set.
#[derive(Debug, Clone)]
pub struct PlatformReport {
    /// Which platform was generated
    pub platform: Platform,
    /// Every icon file written, in generation order
    pub files: Vec<PathBuf>,
    /// Path to the written manifest, when the platform has one
    pub manifest: Option<PathBuf>,
}

/// A Flutter project root and the platform resource paths beneath it.
///
/// Construction never touches the filesystem; each generator checks the
/// existence of its own directory and skips when absent.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Use an explicit project root.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Detect the project from the current directory.
    ///
    /// The current directory is the project iff it contains at least one of
    /// the platform directories (`android/`, `ios/`, `macos/`).
    pub fn detect() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let is_project = ["android", "ios", "macos"]
            .iter()
            .any(|dir| cwd.join(dir).exists());

        if !is_project {
            return Err(Error::ProjectNotDetected);
        }

        log::debug!("detected Flutter project at {}", cwd.display());
        Ok(Self { root: cwd })
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Android resource directory: `android/app/src/main/res`.
    pub fn android_res_dir(&self) -> PathBuf {
        self.root.join("android/app/src/main/res")
    }

    /// iOS asset catalog: `ios/Runner/Assets.xcassets`.
    pub fn ios_assets_dir(&self) -> PathBuf {
        self.root.join("ios/Runner/Assets.xcassets")
    }

    /// iOS app iconset directory inside the asset catalog.
    pub fn ios_appiconset(&self) -> PathBuf {
        self.ios_assets_dir().join("AppIcon.appiconset")
    }

    /// macOS asset catalog: `macos/Runner/Assets.xcassets`.
    pub fn macos_assets_dir(&self) -> PathBuf {
        self.root.join("macos/Runner/Assets.xcassets")
    }

    /// macOS app iconset directory inside the asset catalog.
    pub fn macos_appiconset(&self) -> PathBuf {
        self.macos_assets_dir().join("AppIcon.appiconset")
    }
}
