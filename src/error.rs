// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for extraction and reconstruction
//!
//! Every variant is fatal for the run that produced it: the orchestrator
//! never returns a partial polyline list once a task has failed.

use thiserror::Error;

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, CutlineError>;

#[derive(Debug, Error)]
pub enum CutlineError {
    /// Triangle index list is not a whole number of triangles
    #[error("mesh '{instance}': triangle index count {len} is not a multiple of 3")]
    MalformedTriangles { instance: String, len: usize },

    /// Color and position arrays do not describe the same vertices
    #[error("mesh '{instance}': {colors} vertex colors for {positions} vertex positions")]
    AttributeMismatch {
        instance: String,
        colors: usize,
        positions: usize,
    },

    #[error("mesh '{instance}': vertex index {index} out of range (vertex count {vertex_count})")]
    VertexIndexOutOfRange {
        instance: String,
        index: u32,
        vertex_count: usize,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("result sink closed before all tasks completed")]
    SinkDisconnected,
}
