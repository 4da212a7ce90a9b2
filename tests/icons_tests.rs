//! End-to-end tests for the icon pipeline against a temp Flutter-shaped
//! project tree.

use flutterpack::icons::platform::{Platform, ProjectLayout};
use flutterpack::icons::{self, SourceIcon};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a project root containing the requested platform directories.
fn fake_project(platforms: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for platform in platforms {
        let sub = match *platform {
            "android" => "android/app/src/main/res",
            "ios" => "ios/Runner/Assets.xcassets",
            "macos" => "macos/Runner/Assets.xcassets",
            other => panic!("unknown platform {other}"),
        };
        std::fs::create_dir_all(dir.path().join(sub)).expect("create platform dirs");
    }
    dir
}

/// Write a square source PNG with some pixel variation.
fn write_source_png(dir: &Path, size: u32) -> PathBuf {
    let img = RgbaImage::from_fn(size, size, |x, y| {
        Rgba([(x * 4 % 256) as u8, (y * 4 % 256) as u8, 128, 255])
    });
    let path = dir.join("source.png");
    img.save(&path).expect("save source png");
    path
}

async fn load_icon(dir: &Path) -> SourceIcon {
    let source = write_source_png(dir, 64);
    SourceIcon::load(&source).await.expect("load source")
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).expect("open generated png");
    (img.width(), img.height())
}

#[tokio::test]
async fn android_icons_match_density_sizes() {
    let project = fake_project(&["android"]);
    let layout = ProjectLayout::at(project.path());
    let icon = load_icon(project.path()).await;

    let reports = icons::generate_all(&icon, &layout).await.expect("generate");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].platform, Platform::Android);

    let res = project.path().join("android/app/src/main/res");
    for (density, size) in [
        ("mipmap-mdpi", 48),
        ("mipmap-hdpi", 72),
        ("mipmap-xhdpi", 96),
        ("mipmap-xxhdpi", 144),
        ("mipmap-xxxhdpi", 192),
    ] {
        let path = res.join(density).join("ic_launcher.png");
        assert!(path.exists(), "missing {}", path.display());
        assert_eq!(png_dimensions(&path), (size, size));
    }
}

#[tokio::test]
async fn ios_icon_dimensions_equal_size_times_scale() {
    let project = fake_project(&["ios"]);
    let layout = ProjectLayout::at(project.path());
    let icon = load_icon(project.path()).await;

    icons::generate_all(&icon, &layout).await.expect("generate");

    let iconset = project
        .path()
        .join("ios/Runner/Assets.xcassets/AppIcon.appiconset");
    let manifest: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(iconset.join("Contents.json")).expect("read manifest"),
    )
    .expect("parse manifest");

    let images = manifest["images"].as_array().expect("images array");
    assert!(!images.is_empty());

    for entry in images {
        let filename = entry["filename"].as_str().expect("filename");
        let size = entry["size"].as_str().expect("size");
        let scale = entry["scale"].as_str().expect("scale");

        let nominal: f64 = size.split('x').next().expect("WxH").parse().expect("nominal");
        let factor: f64 = scale.trim_end_matches('x').parse().expect("factor");
        let expected = (nominal * factor) as u32;

        let path = iconset.join(filename);
        assert!(path.exists(), "manifest references missing file {filename}");
        assert_eq!(
            png_dimensions(&path),
            (expected, expected),
            "wrong dimensions for {filename}"
        );
    }

    // The fractional iPad Pro size keeps its decimal in the filename
    let fractional = iconset.join("icon_83.5x83.5@2x.png");
    assert!(fractional.exists());
    assert_eq!(png_dimensions(&fractional), (167, 167));
}

#[tokio::test]
async fn ios_marketing_icon_uses_its_own_idiom() {
    let project = fake_project(&["ios"]);
    let layout = ProjectLayout::at(project.path());
    let icon = load_icon(project.path()).await;

    icons::generate_all(&icon, &layout).await.expect("generate");

    let iconset = project
        .path()
        .join("ios/Runner/Assets.xcassets/AppIcon.appiconset");
    let manifest: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(iconset.join("Contents.json")).expect("read manifest"),
    )
    .expect("parse manifest");

    for entry in manifest["images"].as_array().expect("images array") {
        let expected = if entry["size"] == "1024x1024" {
            "ios-marketing"
        } else {
            "iphone"
        };
        assert_eq!(entry["idiom"], expected, "entry {entry}");
    }
    assert_eq!(manifest["info"]["version"], 1);
    assert_eq!(manifest["info"]["author"], "xcode");
}

#[tokio::test]
async fn manifest_entries_match_generated_files() {
    let project = fake_project(&["ios", "macos"]);
    let layout = ProjectLayout::at(project.path());
    let icon = load_icon(project.path()).await;

    let reports = icons::generate_all(&icon, &layout).await.expect("generate");

    for report in reports {
        let manifest_path = report.manifest.expect("apple platforms have manifests");
        let iconset = manifest_path.parent().expect("manifest parent");

        let manifest: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(&manifest_path).expect("read manifest"),
        )
        .expect("parse manifest");
        let images = manifest["images"].as_array().expect("images array");

        assert_eq!(images.len(), report.files.len());

        let png_count = std::fs::read_dir(iconset)
            .expect("read iconset dir")
            .filter(|e| {
                e.as_ref()
                    .ok()
                    .map(|e| e.path().extension().and_then(|x| x.to_str()) == Some("png"))
                    .unwrap_or(false)
            })
            .count();
        assert_eq!(png_count, images.len());

        for entry in images {
            let filename = entry["filename"].as_str().expect("filename");
            assert!(iconset.join(filename).exists(), "missing {filename}");
        }
    }
}

#[tokio::test]
async fn macos_icons_are_canvas_sized_with_transparent_corners() {
    let project = fake_project(&["macos"]);
    let layout = ProjectLayout::at(project.path());
    let icon = load_icon(project.path()).await;

    icons::generate_all(&icon, &layout).await.expect("generate");

    let iconset = project
        .path()
        .join("macos/Runner/Assets.xcassets/AppIcon.appiconset");

    for (name, px) in [
        ("icon_16x16.png", 16u32),
        ("icon_128x128@2x.png", 256),
        ("icon_1024x1024.png", 1024),
    ] {
        let img = image::open(iconset.join(name)).expect("open icon").to_rgba8();
        assert_eq!(img.dimensions(), (px, px), "wrong canvas for {name}");

        // Corners lie in the padding band and must be fully transparent
        assert_eq!(img.get_pixel(0, 0)[3], 0, "corner not transparent in {name}");
        assert_eq!(img.get_pixel(px - 1, 0)[3], 0);
        assert_eq!(img.get_pixel(0, px - 1)[3], 0);
        assert_eq!(img.get_pixel(px - 1, px - 1)[3], 0);

        // Center is inside the rounded region and opaque
        assert_eq!(img.get_pixel(px / 2, px / 2)[3], 255);
    }
}

#[tokio::test]
async fn skipped_platforms_produce_no_output() {
    let project = fake_project(&["android"]);
    let layout = ProjectLayout::at(project.path());
    let icon = load_icon(project.path()).await;

    let reports = icons::generate_all(&icon, &layout).await.expect("generate");

    assert_eq!(reports.len(), 1);
    assert!(!project.path().join("ios/Runner").exists());
    assert!(!project.path().join("macos/Runner").exists());
}

#[tokio::test]
async fn project_without_platforms_is_rejected() {
    let project = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::at(project.path());
    let icon = load_icon(project.path()).await;

    let err = icons::generate_all(&icon, &layout)
        .await
        .expect_err("no platform dirs must fail");
    assert!(matches!(err, flutterpack::Error::NoPlatformsFound(_)));
}

#[tokio::test]
async fn generation_is_idempotent() {
    let project = fake_project(&["android", "ios", "macos"]);
    let layout = ProjectLayout::at(project.path());
    let icon = load_icon(project.path()).await;

    let first = icons::generate_all(&icon, &layout).await.expect("first run");
    let mut snapshots = Vec::new();
    for report in &first {
        for file in &report.files {
            snapshots.push((file.clone(), std::fs::read(file).expect("read output")));
        }
        if let Some(manifest) = &report.manifest {
            snapshots.push((manifest.clone(), std::fs::read(manifest).expect("read manifest")));
        }
    }

    icons::generate_all(&icon, &layout).await.expect("second run");

    for (path, before) in snapshots {
        let after = std::fs::read(&path).expect("re-read output");
        assert_eq!(before, after, "output changed between runs: {}", path.display());
    }
}

#[tokio::test]
async fn missing_source_fails_before_any_output() {
    let err = SourceIcon::load(Path::new("/nonexistent/source.png"))
        .await
        .expect_err("missing source must fail");
    assert!(matches!(err, flutterpack::Error::SourceNotFound(_)));
}
