// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotator configuration.
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! The file is looked up in the working directory by name.

use crate::models::annotator::KeyBindings;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names probed, in order, when looking for a configuration file.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["annotator.yaml", "annotator.yml", "annotator.json"];

/// Largest canvas edge accepted, in pixels.
pub const MAX_CANVAS_EDGE: u32 = 16384;

/// Runtime settings for the annotator window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Decorative bitmap shown next to the trackbars
    pub preview_image: PathBuf,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Value the canvas is cleared to
    pub background: u8,
    /// Value shapes are stroked with
    pub foreground: u8,
    /// egui key name that toggles rectangle/circle mode
    pub toggle_key: String,
    /// egui key name that ends the render loop
    pub quit_key: String,
    /// Repaint interval of the polling loop
    pub poll_interval_ms: u64,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            preview_image: PathBuf::from("resources/scene.jpg"),
            canvas_width: 512,
            canvas_height: 512,
            background: 0,
            foreground: 255,
            toggle_key: "M".to_string(),
            quit_key: "Escape".to_string(),
            poll_interval_ms: 1,
        }
    }
}

impl AnnotatorConfig {
    /// Load the first configuration file found in `dir`, or the defaults if
    /// there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let found = CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file());

        let config = match found {
            Some(path) => {
                let config = crate::io::serialization::import_config(&path)?;
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            None => {
                log::info!("No configuration file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the annotator cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            bail!(
                "Canvas size must be non-zero, got {}x{}",
                self.canvas_width,
                self.canvas_height
            );
        }
        if self.canvas_width > MAX_CANVAS_EDGE || self.canvas_height > MAX_CANVAS_EDGE {
            bail!(
                "Canvas size {}x{} exceeds the {} pixel limit per edge",
                self.canvas_width,
                self.canvas_height,
                MAX_CANVAS_EDGE
            );
        }
        let keys = self.key_bindings()?;
        if keys.toggle == keys.quit {
            bail!("Toggle and quit keys must differ, both are {:?}", keys.quit);
        }
        Ok(())
    }

    /// Resolve the configured key names.
    pub fn key_bindings(&self) -> Result<KeyBindings> {
        Ok(KeyBindings {
            toggle: parse_key(&self.toggle_key).context("Invalid toggle_key")?,
            quit: parse_key(&self.quit_key).context("Invalid quit_key")?,
        })
    }
}

fn parse_key(name: &str) -> Result<egui::Key> {
    match egui::Key::from_name(name) {
        Some(key) => Ok(key),
        None => bail!("Unknown key name: {:?}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnnotatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.key_bindings().unwrap(), KeyBindings::default());
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let config = AnnotatorConfig {
            canvas_width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_canvas_rejected() {
        let config = AnnotatorConfig {
            canvas_width: 3_000_000_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AnnotatorConfig {
            canvas_height: MAX_CANVAS_EDGE + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AnnotatorConfig {
            canvas_width: MAX_CANVAS_EDGE,
            canvas_height: MAX_CANVAS_EDGE,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let config = AnnotatorConfig {
            toggle_key: "NotAKey".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("toggle_key"));
    }

    #[test]
    fn test_same_toggle_and_quit_rejected() {
        let config = AnnotatorConfig {
            toggle_key: "Escape".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = std::env::temp_dir().join(format!("annotator-empty-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let config = AnnotatorConfig::discover(&dir).unwrap();
        assert_eq!(config, AnnotatorConfig::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_discover_reads_yaml() {
        let dir = std::env::temp_dir().join(format!("annotator-yaml-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("annotator.yaml"),
            "canvas_width: 256\ntoggle_key: C\npreview_image: other.png\n",
        )
        .unwrap();

        let config = AnnotatorConfig::discover(&dir).unwrap();
        assert_eq!(config.canvas_width, 256);
        assert_eq!(config.canvas_height, 512);
        assert_eq!(config.preview_image, PathBuf::from("other.png"));
        assert_eq!(config.key_bindings().unwrap().toggle, egui::Key::C);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_discover_rejects_invalid_file() {
        let dir = std::env::temp_dir().join(format!("annotator-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("annotator.json"), r#"{"canvas_height": 0}"#).unwrap();

        assert!(AnnotatorConfig::discover(&dir).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
