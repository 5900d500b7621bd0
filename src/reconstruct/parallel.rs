// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Parallel reconstruction over mesh instances using rayon
//!
//! One task per instance runs extraction then chain reconstruction. Tasks
//! push their polylines into a channel that is drained only after every
//! task has joined. The first failing task aborts the whole run.

use super::{ChainReconstructor, ReconstructionSummary};
use crate::error::{CutlineError, Result};
use crate::geometry::{Color32, Polyline};
use crate::mesh::{extract_segments, MeshData};
use rayon::prelude::*;
use std::sync::mpsc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Polylines produced by a single instance task
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceBatch {
    /// Position of the instance in the input
    pub instance: usize,
    pub segments: usize,
    pub polylines: Vec<Polyline>,
}

/// Extract and reconstruct one instance on the calling thread
pub fn reconstruct_instance<M: MeshData + ?Sized>(
    instance: &M,
    marker: &Color32,
) -> Result<(usize, Vec<Polyline>)> {
    let soup = extract_segments(instance, marker)?;
    if soup.is_empty() {
        warn!(instance = instance.name(), "no painted edges found");
    }

    let polylines = ChainReconstructor::reconstruct(&soup);
    debug!(
        instance = instance.name(),
        segments = soup.len(),
        polylines = polylines.len(),
        "reconstructed instance"
    );

    Ok((soup.len(), polylines))
}

/// Merge task batches into the final list, ordered by instance position
pub fn merge_batches(mut batches: Vec<InstanceBatch>) -> Vec<Polyline> {
    batches.sort_by_key(|b| b.instance);
    batches.into_iter().flat_map(|b| b.polylines).collect()
}

/// Fans reconstruction out over all instances of a scene
#[derive(Debug, Clone)]
pub struct ParallelReconstructor {
    marker: Color32,
    parallelism: Option<usize>,
}

impl ParallelReconstructor {
    pub fn new(marker: Color32) -> Self {
        Self {
            marker,
            parallelism: None,
        }
    }

    /// Run on a dedicated pool of `threads` workers instead of the global pool
    pub fn with_parallelism(mut self, threads: Option<usize>) -> Self {
        self.parallelism = threads.filter(|&n| n > 0);
        self
    }

    /// Reconstruct the polylines of every instance
    pub fn reconstruct<M: MeshData>(&self, instances: &[M]) -> Result<Vec<Polyline>> {
        self.reconstruct_with_summary(instances)
            .map(|(polylines, _)| polylines)
    }

    /// Reconstruct and report run statistics
    pub fn reconstruct_with_summary<M: MeshData>(
        &self,
        instances: &[M],
    ) -> Result<(Vec<Polyline>, ReconstructionSummary)> {
        let start = Instant::now();

        let batches = match self.parallelism {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                pool.install(|| self.fan_out(instances))?
            }
            None => self.fan_out(instances)?,
        };

        let segments: usize = batches.iter().map(|b| b.segments).sum();
        let painted = batches.iter().filter(|b| b.segments > 0).count();
        let polylines = merge_batches(batches);

        let mut summary = ReconstructionSummary::from_polylines(instances.len(), segments, &polylines);
        summary.painted_instances = painted;
        summary.elapsed = start.elapsed();

        info!(
            instances = summary.instances,
            segments = summary.segments,
            polylines = summary.polylines,
            rings = summary.rings,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "reconstruction complete"
        );

        Ok((polylines, summary))
    }

    fn fan_out<M: MeshData>(&self, instances: &[M]) -> Result<Vec<InstanceBatch>> {
        let (sender, receiver) = mpsc::channel();

        instances
            .par_iter()
            .enumerate()
            .try_for_each_with(sender, |sender, (index, instance)| {
                let (segments, polylines) = reconstruct_instance(instance, &self.marker)?;
                sender
                    .send(InstanceBatch {
                        instance: index,
                        segments,
                        polylines,
                    })
                    .map_err(|_| CutlineError::SinkDisconnected)
            })?;

        // All senders are dropped once the fan-out returns
        Ok(receiver.into_iter().collect())
    }
}
