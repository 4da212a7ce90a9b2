//! # flutterpack
//!
//! Launcher-icon generation and DMG packaging for Flutter desktop/mobile
//! projects.
//!
//! Two independent pipelines behind one CLI:
//!
//! - **Icons**: take a single square source image and resize it into the
//!   full set of Android, iOS, and macOS launcher-icon variants, writing
//!   the Apple `Contents.json` manifests alongside.
//! - **DMG**: wrap a built macOS `.app` bundle into a distributable disk
//!   image via the external `create-dmg` tool.
//!
//! ## Usage
//!
//! ```bash
//! flutterpack icons assets/icon-1024.png          # detect project from cwd
//! flutterpack icons assets/icon-1024.png ~/proj   # explicit project root
//! flutterpack dmg                                 # build, then package
//! flutterpack dmg build/macos/.../MyApp.app       # package existing bundle
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod dmg;
pub mod error;
pub mod icons;
pub(crate) mod utils;

// Re-export main types for public API
pub use cli::Args;
pub use error::{Error, Result};
pub use icons::platform::ProjectLayout;
