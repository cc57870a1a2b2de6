//! # Engine Module
//!
//! This module implements the stateful part of a GIST analysis: accumulating per-frame
//! solvent observations into voxels and turning the final sums into per-voxel fields.
//!
//! ## Overview
//!
//! A run has two strictly separated phases. During **accumulation** the
//! [`accumulator::PerVoxelAccumulator`] is fed one frame at a time; observations within a
//! frame may be bound concurrently, with updates to the same voxel serialized on a per-voxel
//! lock. **Post-processing** starts once the accumulator is frozen: the
//! [`postprocess::Postprocessor`] visits every voxel exactly once, running the entropy
//! estimators over read-only data, which makes the pass embarrassingly parallel.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Grid geometry, temperature, bulk density and solvent
//!   species, validated by a consuming builder
//! - **Sample Storage** ([`store`]) - Per-voxel sample lists with independently lockable slots
//! - **Accumulation** ([`accumulator`]) - Running per-voxel sums and sample binding
//! - **Entropy Estimation** ([`entropy`]) - Orientational, translational and
//!   six-dimensional nearest-neighbor estimators with search diagnostics
//! - **Post-processing** ([`postprocess`]) - Normalized and density-scaled per-voxel fields
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-level error type
//!
//! ## Key Capabilities
//!
//! - **Lock-per-voxel accumulation** so independent molecules never contend
//! - **Expanding shell search** with failure counting for the nearest-neighbor estimators
//! - **Parallel post-processing** over voxels behind the `parallel` feature
//! - **Dense output** with all-zero fields for empty voxels

pub mod accumulator;
pub mod config;
pub mod entropy;
pub mod error;
pub mod postprocess;
pub mod progress;
pub mod store;
