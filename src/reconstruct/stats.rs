// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Reconstruction run statistics

use crate::geometry::Polyline;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counts gathered over one reconstruction run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconstructionSummary {
    pub instances: usize,
    /// Instances that produced at least one segment
    pub painted_instances: usize,
    pub segments: usize,
    pub polylines: usize,
    pub rings: usize,
    pub open: usize,
    pub points: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl ReconstructionSummary {
    /// Tally polylines produced from `segments` extracted segments
    pub fn from_polylines(instances: usize, segments: usize, polylines: &[Polyline]) -> Self {
        let rings = polylines.iter().filter(|p| p.is_closed()).count();
        Self {
            instances,
            painted_instances: 0,
            segments,
            polylines: polylines.len(),
            rings,
            open: polylines.len() - rings,
            points: polylines.iter().map(Polyline::point_count).sum(),
            elapsed: Duration::ZERO,
        }
    }

    /// Every extracted segment appears in exactly one polyline
    pub fn is_conserved(&self) -> bool {
        self.points == self.segments + self.polylines
    }
}
