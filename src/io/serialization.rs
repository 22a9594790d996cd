// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration deserialization.
//!
//! This module reads annotator configuration in YAML and JSON formats,
//! choosing the format from the file extension.

use crate::config::AnnotatorConfig;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Import configuration from YAML format.
pub fn import_yaml(path: &Path) -> Result<AnnotatorConfig> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data = serde_yaml::from_str(&yaml)
        .with_context(|| format!("Failed to parse YAML in {}", path.display()))?;
    Ok(data)
}

/// Import configuration from JSON format.
pub fn import_json(path: &Path) -> Result<AnnotatorConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    Ok(data)
}

/// Import configuration, picking the parser from the file extension.
pub fn import_config(path: &Path) -> Result<AnnotatorConfig> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => bail!("Unsupported file extension: {:?}", extension),
    }
}
