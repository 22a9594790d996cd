// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Preview image loading.
//!
//! The preview is decoded once at startup, converted to grayscale and then
//! only displayed. A missing or undecodable file is reported before any
//! window opens.

use anyhow::{bail, Context, Result};
use image::GrayImage;
use std::path::Path;

/// Load the decorative preview bitmap as grayscale.
pub fn load_preview(path: &Path) -> Result<GrayImage> {
    if !path.is_file() {
        bail!("Resource not found: {}", path.display());
    }

    let image = image::open(path)
        .with_context(|| format!("Resource load failed: {}", path.display()))?
        .to_luma8();

    log::info!(
        "Loaded preview: {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_missing_resource_fails_fast() {
        let path = std::env::temp_dir().join("definitely-missing-scene.jpg");
        let err = load_preview(&path).unwrap_err();
        assert!(err.to_string().starts_with("Resource not found"));
    }

    #[test]
    fn test_undecodable_resource_fails() {
        let path = std::env::temp_dir().join(format!("{}-garbage.png", std::process::id()));
        std::fs::write(&path, b"not an image").unwrap();

        let err = load_preview(&path).unwrap_err();
        assert!(err.to_string().starts_with("Resource load failed"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_preview_is_grayscale() {
        let path = std::env::temp_dir().join(format!("{}-scene.png", std::process::id()));
        GrayImage::from_pixel(12, 8, Luma([90])).save(&path).unwrap();

        let preview = load_preview(&path).unwrap();
        assert_eq!(preview.dimensions(), (12, 8));
        assert_eq!(preview.get_pixel(3, 3).0, [90]);

        std::fs::remove_file(&path).unwrap();
    }
}
