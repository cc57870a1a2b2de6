//! # Entropy Estimators
//!
//! Nearest-neighbor estimates of the solvent entropy bound to each voxel.
//!
//! ## Overview
//!
//! Every estimator follows the same scheme: for each sample in a voxel, find the distance
//! to its nearest neighbor in some space, turn that distance into the volume of the
//! neighbor ball scaled by the bulk density, and average the logarithms. Adding the
//! Euler–Mascheroni constant removes the bias of the estimator; multiplying by `kT` gives
//! the entropy term `TΔS` relative to bulk, in kcal/mol per molecule.
//!
//! - **Orientational** ([`orientational`]) - Rotation-angle neighbors within the same voxel
//! - **Translational and six-dimensional** ([`nearest_neighbor`]) - Expanding shell search
//!   over neighboring voxels in position space and in the combined position + rotation
//!   space, with the [`correction`] table applied to the six-dimensional volume
//! - **Diagnostics** ([`statistics`]) - Counts of searches that could not be proven exact
//!
//! All estimators are read-only over the frozen samples and may run concurrently on
//! different voxels.

pub mod correction;
pub mod nearest_neighbor;
pub mod orientational;
pub mod statistics;

use crate::core::constants::GAS_CONSTANT_KCAL;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EntropyError {
    #[error(
        "Two samples in voxel {voxel} share position and orientation (frames {frame} and {neighbor_frame})"
    )]
    CoincidentSamples {
        voxel: usize,
        frame: u64,
        neighbor_frame: u64,
    },
}

/// Run-wide quantities every estimator needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyContext {
    pub temperature: f64,
    pub reference_density: f64,
    pub n_frames: u64,
    pub voxel_volume: f64,
}

impl EntropyContext {
    /// `k_B·T` in kcal/mol.
    pub fn kt(&self) -> f64 {
        GAS_CONSTANT_KCAL * self.temperature
    }

    /// Per-volume, per-frame scaling of a per-molecule value averaged over `count` molecules.
    pub fn density(&self, norm: f64, count: usize) -> f64 {
        norm * count as f64 / (self.n_frames as f64 * self.voxel_volume)
    }
}

/// A per-molecule (`norm`) and per-volume, per-frame (`dens`) value of one voxel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaledValue {
    pub norm: f64,
    pub dens: f64,
}

impl ScaledValue {
    pub const ZERO: ScaledValue = ScaledValue {
        norm: 0.0,
        dens: 0.0,
    };
}
