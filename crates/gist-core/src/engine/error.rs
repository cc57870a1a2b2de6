use thiserror::Error;

use super::config::ConfigError;
use super::entropy::EntropyError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Entropy estimation failed: {source}")]
    Entropy {
        #[from]
        source: EntropyError,
    },

    #[error("Voxel index {voxel} is outside the grid ({n_voxels} voxels)")]
    VoxelOutOfRange { voxel: usize, n_voxels: usize },

    #[error("Solvent species index {species} is not configured ({n_species} species)")]
    SpeciesOutOfRange { species: usize, n_species: usize },

    #[error("The trajectory contains no frames")]
    EmptyTrajectory,

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
