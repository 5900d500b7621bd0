// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON scene importer

use crate::mesh::Scene;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a scene from JSON text
pub fn parse_scene(source: &str) -> Result<Scene> {
    let mut scene: Scene = serde_json::from_str(source).context("Invalid scene JSON")?;

    for (i, instance) in scene.instances.iter_mut().enumerate() {
        if instance.name.is_empty() {
            instance.name = format!("instance_{i}");
        }
    }

    Ok(scene)
}

/// Load a scene file whose instances are scanned for painted edges
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {}", path.display()))?;

    parse_scene(&source).with_context(|| format!("Failed to parse scene file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color32;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENE: &str = r##"{
        "marker_color": "#FF00FF",
        "instances": [
            {
                "indices": [0, 1, 2],
                "colors": [[255, 0, 255], [255, 0, 255], [0, 0, 0]],
                "positions": [[0, 0, 0], [1, 0, 0], [0, 0, 1]]
            },
            {
                "name": "ridge",
                "indices": [],
                "colors": [],
                "positions": []
            }
        ]
    }"##;

    #[test]
    fn test_load_scene_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "{}", SCENE)?;

        let scene = load_scene(file.path())?;
        assert_eq!(scene.marker_color, Some(Color32::rgb(255, 0, 255)));
        assert_eq!(scene.instances.len(), 2);
        assert_eq!(scene.instances[0].name, "instance_0");
        assert_eq!(scene.instances[1].name, "ridge");

        Ok(())
    }

    #[test]
    fn test_missing_scene_file() {
        let err = load_scene("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("exist.json"));
    }

    #[test]
    fn test_invalid_scene_json() {
        assert!(parse_scene("{ \"instances\": [ { \"indices\": 3 } ] }").is_err());
    }
}
