// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Reconstruction configuration

use crate::geometry::Color32;
use crate::io::ExportPlane;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "cutline.toml";

/// Reconstruction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutlineConfig {
    /// Vertex color marking boundary vertices (RGB compared only)
    pub marker_color: Color32,
    /// Worker threads; `None` uses the global rayon pool
    pub parallelism: Option<usize>,
    /// Output file for reconstructed polylines
    pub output: Option<PathBuf>,
    /// Coordinate space written on export
    pub plane: ExportPlane,
    /// Pretty-print exported JSON
    pub pretty: bool,
}

impl Default for CutlineConfig {
    fn default() -> Self {
        Self {
            marker_color: Color32::RED,
            parallelism: None, // Auto-detect
            output: None,
            plane: ExportPlane::World,
            pretty: false,
        }
    }
}

impl CutlineConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: CutlineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `cutline.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.with_env_overrides()
    }

    /// Apply `CUTLINE_*` environment variable overrides
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(color) = std::env::var("CUTLINE_MARKER_COLOR") {
            self.marker_color = color
                .parse::<Color32>()
                .context("Invalid CUTLINE_MARKER_COLOR")?;
        }

        if let Ok(parallelism) = std::env::var("CUTLINE_PARALLELISM") {
            self.parallelism = parallelism.parse().ok();
        }

        if let Ok(output) = std::env::var("CUTLINE_OUTPUT") {
            self.output = Some(PathBuf::from(output));
        }

        Ok(self)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
