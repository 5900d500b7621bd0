// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - scene import and polyline export

mod export;
mod scene;

pub use export::{export_polylines, polylines_to_json, render_polylines, write_outputs, ExportPlane};
pub use scene::{load_scene, parse_scene};
