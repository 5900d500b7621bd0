// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::{BoundingBox, Polyline};
use crate::reconstruct::ReconstructionSummary;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a finished reconstruction run
    pub fn report_reconstruction(scene: &str, summary: &ReconstructionSummary, polylines: &[Polyline]) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Scene:".bold(), scene.cyan());
        println!("{}", "━".repeat(80).bright_black());

        if summary.polylines == 0 {
            println!("{} {}", "⚠️".yellow(), "No painted edges found".yellow().bold());
        } else if summary.is_conserved() {
            println!(
                "{} {}",
                "✅".green(),
                format!("Reconstructed {} cutlines", summary.polylines).green().bold()
            );
        } else {
            println!(
                "{} {}",
                "❌".red(),
                "Segment count does not match output".red().bold()
            );
        }

        println!("\n{}", "Counts:".bold());
        Self::print_field(
            "Instances",
            &format!("{} ({} painted)", summary.instances, summary.painted_instances),
        );
        Self::print_field("Segments", &summary.segments.to_string());
        Self::print_field(
            "Cutlines",
            &format!("{} ({} rings, {} open)", summary.polylines, summary.rings, summary.open),
        );
        Self::print_field("Points", &summary.points.to_string());

        let bounds = BoundingBox::from_polylines(polylines);
        if !bounds.is_empty() {
            let size = bounds.size();
            Self::print_field(
                "Extent",
                &format!("{:.2} x {:.2} x {:.2}", size.x, size.y, size.z),
            );
        }

        println!("\n{}", "Performance:".bold());
        println!(
            "  {} {}",
            "Reconstruction:".bright_black(),
            Self::format_duration(summary.elapsed).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report the segment count of each instance
    pub fn report_inspection(scene: &str, rows: &[(String, usize, usize)]) {
        println!("\n{} {}", "Scene:".bold(), scene.cyan());
        for (name, triangles, segments) in rows {
            let segments = if *segments == 0 {
                segments.to_string().bright_black()
            } else {
                segments.to_string().cyan()
            };
            println!(
                "  {:<32} {} {:>8}  {} {}",
                name,
                "triangles".bright_black(),
                triangles,
                "segments".bright_black(),
                segments
            );
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn print_field(name: &str, value: &str) {
        println!("  {} {}", format!("{}:", name).bright_black(), value.cyan());
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
