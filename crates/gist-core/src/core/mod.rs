//! # Core Module
//!
//! This module provides the fundamental, stateless building blocks of a GIST analysis.
//!
//! ## Overview
//!
//! Everything in here is either immutable after construction or a pure function: the
//! voxel geometry, the representation of a single solvent observation, the orientation
//! metric, physical constants and the writers that serialize finished results. Stateful
//! accumulation and the entropy estimators live in [`crate::engine`].
//!
//! ## Architecture
//!
//! - **Voxel Geometry** ([`grid`]) - Grid definition, position binning, index arithmetic
//!   and hollow-shell enumeration for the expanding nearest-neighbor search
//! - **Orientation** ([`orientation`]) - Rotatable/rotationless solvent orientation and the
//!   rotational distance between two orientations
//! - **Observations** ([`sample`]) - One solvent molecule seen in one frame
//! - **Physics** ([`constants`], [`geometry`]) - Unit constants and molecular helpers
//!   (dipole, center of mass, tetrahedral order)
//! - **Output** ([`io`]) - OpenDX volumetric grids and the GIST text table
//!
//! ## Scientific Foundation
//!
//! - **Inhomogeneous solvation theory** expressed on a discrete spatial grid
//! - **Nearest-neighbor entropy estimation** in translational, orientational and combined
//!   six-dimensional space
//! - **Quaternion orientation metric** identifying `q` and `-q` as the same rotation

pub mod constants;
pub mod geometry;
pub mod grid;
pub mod io;
pub mod orientation;
pub mod sample;
