// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cutline
//!
//! Extracts painted boundary edges from colored terrain meshes and rebuilds
//! them into continuous polylines for tile generation. Each mesh instance is
//! processed independently and in parallel.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod reconstruct;

pub use config::CutlineConfig;
pub use error::{CutlineError, Result};
pub use geometry::{Color32, Polyline, Segment, SegmentSoup};
pub use io::{export_polylines, load_scene, ExportPlane};
pub use mesh::{extract_segments, MeshData, MeshInstance, Scene};
pub use reconstruct::{ChainReconstructor, ParallelReconstructor, ReconstructionSummary};

/// Reconstruct every cutline of a scene with the given marker color
pub fn reconstruct_scene(scene: &Scene, marker: Color32) -> Result<Vec<Polyline>> {
    ParallelReconstructor::new(marker).reconstruct(&scene.instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_basic_triangle_ring() {
        let instance = MeshInstance::new(
            "tri",
            vec![0, 1, 2],
            vec![Color32::RED; 3],
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
        );
        let lines = reconstruct_scene(&Scene::new(vec![instance]), Color32::RED).unwrap();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_closed());
        assert_eq!(lines[0].point_count(), 4);
    }
}
