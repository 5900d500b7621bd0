// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - predicates, segments and polylines

mod bbox;
mod polyline;
mod predicates;
mod segment;

pub use bbox::BoundingBox;
pub use polyline::Polyline;
pub use predicates::{colors_equal, points_equal, Color32, ParseColorError, EPSILON};
pub use segment::{Segment, SegmentSoup};
