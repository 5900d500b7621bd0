// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Directed boundary segments

use super::predicates::points_equal;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Directed segment in world space
///
/// Direction follows the winding of the triangle the edge came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
}

impl Segment {
    pub fn new(start: Point3<f32>, end: Point3<f32>) -> Self {
        Self { start, end }
    }

    /// True if `next` continues this segment head-to-tail
    pub fn continues_into(&self, next: &Segment) -> bool {
        points_equal(&self.end, &next.start)
    }
}

/// Segments extracted from one mesh instance, in emission order
pub type SegmentSoup = Vec<Segment>;
