// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Reconstruction module - segment soups to cutlines

mod chain;
mod parallel;
mod stats;

pub use chain::ChainReconstructor;
pub use parallel::{merge_batches, reconstruct_instance, InstanceBatch, ParallelReconstructor};
pub use stats::ReconstructionSummary;
