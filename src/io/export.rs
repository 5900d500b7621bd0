// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyline exporter

use crate::geometry::Polyline;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Coordinate space of exported points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportPlane {
    /// World-space `[x, y, z]`
    #[default]
    World,
    /// Ground plane `[x, z]`
    Xz,
}

/// Build the JSON document for a set of polylines
pub fn polylines_to_json(polylines: &[Polyline], plane: ExportPlane) -> Value {
    let lines: Vec<Value> = polylines
        .iter()
        .map(|line| {
            let points: Vec<Value> = match plane {
                ExportPlane::World => line.points.iter().map(|p| json!([p.x, p.y, p.z])).collect(),
                ExportPlane::Xz => line.project_xz().iter().map(|p| json!([p.x, p.y])).collect(),
            };
            json!({ "closed": line.is_closed(), "points": points })
        })
        .collect();

    Value::Array(lines)
}

/// Serialize polylines as a JSON array of `{ closed, points }` objects
pub fn render_polylines(polylines: &[Polyline], plane: ExportPlane, pretty: bool) -> Result<String> {
    let document = polylines_to_json(polylines, plane);
    let content = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(content)
}

/// Write polylines as a JSON array of `{ closed, points }` objects
pub fn export_polylines(
    polylines: &[Polyline],
    path: impl AsRef<Path>,
    plane: ExportPlane,
    pretty: bool,
) -> Result<()> {
    let content = render_polylines(polylines, plane, pretty)?;
    write_outputs(&[(path.as_ref().to_path_buf(), content)])
}

/// Write every `(path, content)` pair, or none of them
///
/// Contents are staged next to their targets first; targets are only
/// replaced once every staged file is on disk.
pub fn write_outputs(outputs: &[(PathBuf, String)]) -> Result<()> {
    let mut staged = Vec::with_capacity(outputs.len());

    for (path, content) in outputs {
        match stage(path, content) {
            Ok(temp) => staged.push(temp),
            Err(err) => {
                discard(&staged);
                return Err(err);
            }
        }
    }

    for (i, ((path, _), temp)) in outputs.iter().zip(&staged).enumerate() {
        if let Err(err) = std::fs::rename(temp, path) {
            discard(&staged[i..]);
            return Err(err).with_context(|| format!("Failed to write polylines: {}", path.display()));
        }
    }

    Ok(())
}

fn stage(path: &Path, content: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let mut temp = path.as_os_str().to_owned();
    temp.push(".partial");
    let temp = PathBuf::from(temp);

    std::fs::write(&temp, content)
        .with_context(|| format!("Failed to write polylines: {}", path.display()))?;
    Ok(temp)
}

fn discard(staged: &[PathBuf]) {
    for temp in staged {
        if let Err(err) = std::fs::remove_file(temp) {
            tracing::warn!(path = %temp.display(), %err, "failed to remove staged output");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use tempfile::TempDir;

    fn sample() -> Vec<Polyline> {
        vec![Polyline::open(vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)])]
    }

    #[test]
    fn test_world_json() {
        let doc = polylines_to_json(&sample(), ExportPlane::World);
        assert_eq!(
            doc,
            json!([{ "closed": false, "points": [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]] }])
        );
    }

    #[test]
    fn test_xz_json() {
        let doc = polylines_to_json(&sample(), ExportPlane::Xz);
        assert_eq!(doc[0]["points"], json!([[1.0, 3.0], [4.0, 6.0]]));
    }

    #[test]
    fn test_export_creates_parent_dirs() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("lines.json");

        export_polylines(&sample(), &path, ExportPlane::World, true)?;

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(written, polylines_to_json(&sample(), ExportPlane::World));
        Ok(())
    }

    #[test]
    fn test_fractional_coordinates_survive_file() -> Result<()> {
        // f32 values that widen to long f64 decimals
        let lines = vec![Polyline::closed(vec![
            Point3::new(0.1, -4.371139e-8, 1.0 / 3.0),
            Point3::new(-0.7071068, 2.5e-7, 123.456),
            Point3::new(0.1, -4.371139e-8, 1.0 / 3.0),
        ])];
        let dir = TempDir::new()?;
        let path = dir.path().join("fraction.json");

        export_polylines(&lines, &path, ExportPlane::World, false)?;

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(written, polylines_to_json(&lines, ExportPlane::World));
        Ok(())
    }

    #[test]
    fn test_failed_batch_writes_nothing() -> Result<()> {
        let dir = TempDir::new()?;
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory")?;

        let first = dir.path().join("first.cutlines.json");
        let second = blocker.join("second.cutlines.json");
        let content = render_polylines(&sample(), ExportPlane::World, false)?;

        let result = write_outputs(&[(first.clone(), content.clone()), (second.clone(), content)]);

        assert!(result.is_err());
        assert!(!first.exists());
        assert!(!second.exists());
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<std::io::Result<_>>()?;
        assert_eq!(leftovers, vec![std::ffi::OsString::from("blocker")]);
        Ok(())
    }

    #[test]
    fn test_batch_replaces_existing_outputs() -> Result<()> {
        let dir = TempDir::new()?;
        let first = dir.path().join("a.json");
        let second = dir.path().join("nested").join("b.json");
        std::fs::write(&first, "stale")?;

        write_outputs(&[(first.clone(), "[]".to_string()), (second.clone(), "[]".to_string())])?;

        assert_eq!(std::fs::read_to_string(&first)?, "[]");
        assert_eq!(std::fs::read_to_string(&second)?, "[]");
        Ok(())
    }
}
