// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Painted mesh instances and the scene that groups them

mod extract;

pub use extract::extract_segments;

use crate::geometry::Color32;
use nalgebra::{Matrix4, Point3};
use serde::{Deserialize, Serialize};

/// Source of per-instance mesh data
///
/// Implemented by anything that can hand out a triangle list, per-vertex
/// colors and local positions, plus the local-to-world placement.
pub trait MeshData: Sync {
    /// Name used in diagnostics
    fn name(&self) -> &str;
    /// Flat triangle index list
    fn indices(&self) -> &[u32];
    fn colors(&self) -> &[Color32];
    /// Local-space vertex positions
    fn positions(&self) -> &[Point3<f32>];
    fn to_world(&self, local: &Point3<f32>) -> Point3<f32>;
}

/// Owned mesh instance placed in the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshInstance {
    #[serde(default)]
    pub name: String,
    pub indices: Vec<u32>,
    pub colors: Vec<Color32>,
    pub positions: Vec<Point3<f32>>,
    #[serde(default = "Matrix4::identity")]
    pub transform: Matrix4<f32>,
}

impl MeshInstance {
    pub fn new(
        name: impl Into<String>,
        indices: Vec<u32>,
        colors: Vec<Color32>,
        positions: Vec<Point3<f32>>,
    ) -> Self {
        Self {
            name: name.into(),
            indices,
            colors,
            positions,
            transform: Matrix4::identity(),
        }
    }

    pub fn with_transform(mut self, transform: Matrix4<f32>) -> Self {
        self.transform = transform;
        self
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl MeshData for MeshInstance {
    fn name(&self) -> &str {
        &self.name
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }

    fn colors(&self) -> &[Color32] {
        &self.colors
    }

    fn positions(&self) -> &[Point3<f32>] {
        &self.positions
    }

    fn to_world(&self, local: &Point3<f32>) -> Point3<f32> {
        self.transform.transform_point(local)
    }
}

/// Root container whose children are scanned for painted edges
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Marker color embedded in the scene file, if any
    #[serde(default)]
    pub marker_color: Option<Color32>,
    #[serde(default)]
    pub instances: Vec<MeshInstance>,
}

impl Scene {
    pub fn new(instances: Vec<MeshInstance>) -> Self {
        Self {
            marker_color: None,
            instances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_instance_world_transform() {
        let instance = MeshInstance::new("tile", vec![], vec![], vec![])
            .with_transform(Matrix4::new_translation(&Vector3::new(10.0, 0.0, -5.0)));

        let world = instance.to_world(&Point3::new(1.0, 2.0, 3.0));
        assert_eq!(world, Point3::new(11.0, 2.0, -2.0));
    }

    #[test]
    fn test_instance_transform_defaults_to_identity() {
        let json = r##"{
            "name": "a",
            "indices": [0, 1, 2],
            "colors": ["#FF0000", [255, 0, 0], [255, 255, 255, 255]],
            "positions": [[0, 0, 0], [1, 0, 0], [0, 0, 1]]
        }"##;
        let instance: MeshInstance = serde_json::from_str(json).unwrap();

        assert_eq!(instance.transform, Matrix4::identity());
        assert_eq!(instance.triangle_count(), 1);
        assert_eq!(instance.colors[1], Color32::RED);
    }
}
