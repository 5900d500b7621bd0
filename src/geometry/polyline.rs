// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Reconstructed cutlines

use super::BoundingBox;
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// Ordered path of points, either an open chain or a closed ring
///
/// A ring repeats its first point as its last point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point3<f32>>,
    pub closed: bool,
}

impl Polyline {
    pub fn open(points: Vec<Point3<f32>>) -> Self {
        debug_assert!(points.len() >= 2, "polyline needs at least two points");
        Self {
            points,
            closed: false,
        }
    }

    pub fn closed(points: Vec<Point3<f32>>) -> Self {
        debug_assert!(points.len() >= 2, "polyline needs at least two points");
        Self {
            points,
            closed: true,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of points, including the repeated point of a ring
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of segments consumed to build this polyline
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&Point3<f32>> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point3<f32>> {
        self.points.last()
    }

    /// Total path length
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Project onto the terrain ground plane, dropping height
    pub fn project_xz(&self) -> Vec<Point2<f32>> {
        self.points.iter().map(|p| Point2::new(p.x, p.z)).collect()
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
    }
}
