// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cutline CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cutline::cli::Reporter;
use cutline::io::{render_polylines, write_outputs};
use cutline::{
    extract_segments, load_scene, Color32, CutlineConfig, ExportPlane,
    ParallelReconstructor, Polyline, ReconstructionSummary,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cutline")]
#[command(about = "Cutline - rebuild painted mesh boundaries into polylines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./cutline.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract painted edges and reconstruct cutlines
    Reconstruct {
        /// Scene file(s)
        #[arg(required = true)]
        scenes: Vec<PathBuf>,

        /// Output file, or directory when several scenes are given
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Marker color as hex (#RRGGBB)
        #[arg(short, long)]
        marker: Option<Color32>,

        /// Worker threads
        #[arg(short = 'j', long)]
        jobs: Option<usize>,

        /// Coordinate space of exported points
        #[arg(long, value_enum)]
        plane: Option<ExportPlane>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List painted segment counts per mesh instance
    Inspect {
        /// Scene file
        scene: PathBuf,

        /// Marker color as hex (#RRGGBB)
        #[arg(short, long)]
        marker: Option<Color32>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "cutline=debug" } else { "cutline=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CutlineConfig::from_file(path)?.with_env_overrides()?,
        None => CutlineConfig::load()?,
    };

    match cli.command {
        Commands::Reconstruct {
            scenes,
            output,
            marker,
            jobs,
            plane,
            pretty,
        } => {
            let mut config = config;
            if jobs.is_some() {
                config.parallelism = jobs;
            }
            if let Some(plane) = plane {
                config.plane = plane;
            }
            if output.is_some() {
                config.output = output;
            }
            config.pretty |= pretty;
            reconstruct_command(&scenes, marker, &config, cli.verbose)
        }
        Commands::Inspect { scene, marker } => inspect_command(&scene, marker, &config),
        Commands::Version => {
            println!("Cutline v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn reconstruct_command(
    scenes: &[PathBuf],
    marker: Option<Color32>,
    config: &CutlineConfig,
    verbose: bool,
) -> Result<()> {
    let progress = if scenes.len() > 1 {
        let pb = ProgressBar::new(scenes.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Nothing is written unless every scene reconstructs
    let mut results: Vec<(PathBuf, Vec<Polyline>, ReconstructionSummary)> = Vec::new();
    for scene_path in scenes {
        if let Some(ref pb) = progress {
            pb.set_message(scene_path.display().to_string());
        }

        let scene = load_scene(scene_path)?;
        let marker = marker.or(scene.marker_color).unwrap_or(config.marker_color);
        let (polylines, summary) = ParallelReconstructor::new(marker)
            .with_parallelism(config.parallelism)
            .reconstruct_with_summary(&scene.instances)
            .with_context(|| format!("Reconstruction failed for {}", scene_path.display()))?;

        let output = output_path(scene_path, config.output.as_deref(), scenes.len() > 1);
        results.push((output, polylines, summary));

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("reconstruction complete");
    }

    let mut outputs = Vec::with_capacity(results.len());
    for ((output, polylines, summary), scene_path) in results.iter().zip(scenes) {
        if verbose || scenes.len() == 1 {
            Reporter::report_reconstruction(&scene_path.display().to_string(), summary, polylines);
        }
        if !summary.is_conserved() {
            Reporter::report_warning(&format!(
                "{}: {} points for {} segments in {} cutlines",
                scene_path.display(),
                summary.points,
                summary.segments,
                summary.polylines
            ));
        }

        let content = render_polylines(polylines, config.plane, config.pretty)?;
        outputs.push((output.clone(), content));
    }

    write_outputs(&outputs)?;
    for ((output, _, _), scene_path) in results.iter().zip(scenes) {
        Reporter::success(&format!("{} -> {}", scene_path.display(), output.display()));
    }

    Ok(())
}

fn inspect_command(scene_path: &Path, marker: Option<Color32>, config: &CutlineConfig) -> Result<()> {
    let scene = load_scene(scene_path)?;
    let marker = marker.or(scene.marker_color).unwrap_or(config.marker_color);

    let mut rows = Vec::with_capacity(scene.instances.len());
    for instance in &scene.instances {
        let soup = extract_segments(instance, &marker)?;
        rows.push((instance.name.clone(), instance.triangle_count(), soup.len()));
    }

    Reporter::report_inspection(&scene_path.display().to_string(), &rows);
    Ok(())
}

/// Resolve where the cutlines of `scene` are written
fn output_path(scene: &Path, output: Option<&Path>, batch: bool) -> PathBuf {
    let file_name = format!(
        "{}.cutlines.json",
        scene.file_stem().and_then(|s| s.to_str()).unwrap_or("scene")
    );

    match output {
        Some(dir) if batch => dir.join(file_name),
        Some(file) => file.to_path_buf(),
        None => scene.with_file_name(file_name),
    }
}
