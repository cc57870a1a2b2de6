//! # Workflows Module
//!
//! High-level entry points that run a complete GIST analysis.
//!
//! ## Overview
//!
//! Workflows are the top-level API of GIST++. They take a validated configuration and a
//! trajectory of pre-resolved solvent observations, drive the engine through its
//! accumulation and post-processing phases, report progress along the way, and hand back
//! the finished per-voxel fields together with the run diagnostics.
//!
//! ## Architecture
//!
//! - **Analysis Workflow** ([`analyze`]) - Accumulates every frame, freezes the grid and
//!   post-processes all voxels into a [`crate::engine::postprocess::GistResult`]

pub mod analyze;
