//! Command line argument parsing and validation.
//!
//! This module provides minimal CLI argument parsing.
//! The tool is designed to "just work" - point it at a project, it generates.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Icon generation and DMG packaging for Flutter projects
#[derive(Parser, Debug)]
#[command(
    name = "flutterpack",
    version,
    about = "Icon generation and DMG packaging for Flutter projects",
    long_about = "Generate the full set of Android/iOS/macOS launcher icons from a \
single square image, and wrap built macOS apps into distributable DMGs.

Usage:
  flutterpack icons assets/icon-1024.png
  flutterpack icons assets/icon-1024.png /path/to/flutter/project
  flutterpack dmg
  flutterpack dmg build/macos/Build/Products/Release/MyApp.app"
)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate all platform launcher icons from one square source image
    Icons {
        /// Path to the square source image (1024x1024 recommended)
        #[arg(value_name = "SOURCE_IMAGE")]
        source: PathBuf,

        /// Flutter project root (default: detect from current directory)
        #[arg(value_name = "PROJECT_PATH")]
        project: Option<PathBuf>,
    },

    /// Package a macOS .app bundle into a distributable DMG
    Dmg {
        /// Path to the .app bundle (default: build and locate it)
        #[arg(value_name = "APP_PATH")]
        app: Option<PathBuf>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Icons { source, .. } => {
                if source.as_os_str().is_empty() {
                    return Err("Source image path is required".to_string());
                }
            }
            Command::Dmg { app } => {
                if let Some(app) = app
                    && app.as_os_str().is_empty()
                {
                    return Err("App bundle path must not be empty".to_string());
                }
            }
        }

        Ok(())
    }
}
