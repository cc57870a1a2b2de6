//! # GIST++ Core Library
//!
//! A high-performance library for grid inhomogeneous solvation theory (GIST) analysis,
//! aggregating per-frame solvent observations into a voxel grid and turning them into
//! spatially resolved energies, entropies, dipoles and densities.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture to keep concerns separate,
//! making every part modular and independently testable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Grid`, `Sample`, `Orientation`),
//!   physical constants, geometry helpers and output writers.
//!
//! - **[`engine`]: The Logic Core.** The stateful layer: the lock-striped `SampleStore`,
//!   the `PerVoxelAccumulator` that is fed frame by frame, the nearest-neighbor and
//!   orientational entropy estimators, and the `Postprocessor` that turns frozen sums into
//!   per-voxel fields.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into a complete
//!   analysis pass over a trajectory of pre-resolved solvent observations.

pub mod core;
pub mod engine;
pub mod workflows;
