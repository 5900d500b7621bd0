// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Segment extraction - painted triangle edges to directed world-space segments

use super::MeshData;
use crate::error::{CutlineError, Result};
use crate::geometry::{colors_equal, Color32, Segment, SegmentSoup};

/// Collect every triangle edge whose two endpoints carry the marker color
///
/// Edges are emitted as `a -> b`, `b -> c`, `c -> a` per triangle, so the
/// segment direction follows the triangle winding. The mesh is validated up
/// front; no segment is produced for malformed input.
pub fn extract_segments<M: MeshData + ?Sized>(mesh: &M, marker: &Color32) -> Result<SegmentSoup> {
    validate(mesh)?;

    let indices = mesh.indices();
    let colors = mesh.colors();
    let positions = mesh.positions();
    let len = indices.len();

    let is_marked = |index: u32| colors_equal(&colors[index as usize], marker);
    let world = |index: u32| mesh.to_world(&positions[index as usize]);

    let mut soup = SegmentSoup::new();
    for j in (0..len).step_by(3) {
        let a = indices[j];
        let b = indices[(j + 1) % len];
        let c = indices[(j + 2) % len];

        for (from, to) in [(a, b), (b, c), (c, a)] {
            if is_marked(from) && is_marked(to) {
                soup.push(Segment::new(world(from), world(to)));
            }
        }
    }

    Ok(soup)
}

fn validate<M: MeshData + ?Sized>(mesh: &M) -> Result<()> {
    let indices = mesh.indices();
    if indices.len() % 3 != 0 {
        return Err(CutlineError::MalformedTriangles {
            instance: mesh.name().to_string(),
            len: indices.len(),
        });
    }

    let colors = mesh.colors().len();
    let positions = mesh.positions().len();
    if colors != positions {
        return Err(CutlineError::AttributeMismatch {
            instance: mesh.name().to_string(),
            colors,
            positions,
        });
    }

    if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions) {
        return Err(CutlineError::VertexIndexOutOfRange {
            instance: mesh.name().to_string(),
            index,
            vertex_count: positions,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshInstance;
    use nalgebra::{Matrix4, Point3, Vector3};

    const MARK: Color32 = Color32::RED;
    const PLAIN: Color32 = Color32::WHITE;

    fn quad(colors: [Color32; 4]) -> MeshInstance {
        // Two CCW triangles sharing the 0-2 diagonal
        MeshInstance::new(
            "quad",
            vec![0, 1, 2, 0, 2, 3],
            colors.to_vec(),
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_extract_keeps_winding_direction() {
        let mesh = quad([MARK, MARK, PLAIN, PLAIN]);
        let soup = extract_segments(&mesh, &MARK).unwrap();

        assert_eq!(
            soup,
            vec![Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0))]
        );
    }

    #[test]
    fn test_extract_emits_shared_edges_per_triangle() {
        let mesh = quad([MARK, PLAIN, MARK, PLAIN]);
        let soup = extract_segments(&mesh, &MARK).unwrap();

        // The diagonal appears once per triangle, in opposite directions
        assert_eq!(soup.len(), 2);
        assert_eq!(soup[0].start, soup[1].end);
        assert_eq!(soup[0].end, soup[1].start);
    }

    #[test]
    fn test_extract_alpha_is_ignored() {
        let faded = Color32::new(255, 0, 0, 0);
        let mesh = quad([faded, faded, faded, faded]);
        let soup = extract_segments(&mesh, &MARK).unwrap();
        assert_eq!(soup.len(), 6);
    }

    #[test]
    fn test_extract_applies_world_transform() {
        let mesh = quad([MARK, MARK, PLAIN, PLAIN])
            .with_transform(Matrix4::new_translation(&Vector3::new(0.0, 0.0, 10.0)));
        let soup = extract_segments(&mesh, &MARK).unwrap();

        assert_eq!(soup[0].start, Point3::new(0.0, 0.0, 10.0));
        assert_eq!(soup[0].end, Point3::new(1.0, 0.0, 10.0));
    }

    #[test]
    fn test_extract_unpainted_mesh_is_empty() {
        let mesh = quad([PLAIN; 4]);
        assert!(extract_segments(&mesh, &MARK).unwrap().is_empty());
    }

    #[test]
    fn test_extract_rejects_partial_triangle() {
        let mut mesh = quad([MARK; 4]);
        mesh.indices.push(1);

        let err = extract_segments(&mesh, &MARK).unwrap_err();
        assert!(matches!(err, CutlineError::MalformedTriangles { len: 7, .. }));
    }

    #[test]
    fn test_extract_rejects_missing_colors() {
        let mut mesh = quad([MARK; 4]);
        mesh.colors.clear();

        let err = extract_segments(&mesh, &MARK).unwrap_err();
        assert!(matches!(
            err,
            CutlineError::AttributeMismatch { colors: 0, positions: 4, .. }
        ));
    }

    #[test]
    fn test_extract_rejects_out_of_range_index() {
        let mut mesh = quad([MARK; 4]);
        mesh.indices[4] = 9;

        let err = extract_segments(&mesh, &MARK).unwrap_err();
        assert!(matches!(
            err,
            CutlineError::VertexIndexOutOfRange { index: 9, vertex_count: 4, .. }
        ));
    }
}
