use super::config::{ConfigError, GistConfig};
use super::error::EngineError;
use super::store::{FrozenSamples, SampleStore};
use crate::core::grid::Grid;
use crate::core::sample::{Sample, SolventObservation};
use nalgebra::{Point3, Vector3};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyKind {
    SolventSolvent,
    SoluteSolvent,
}

/// Running sums of one voxel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelStats {
    pub population: u64,
    pub energy_solvent_solvent: f64,
    pub energy_solute_solvent: f64,
    pub dipole: Vector3<f64>,
    pub neighbor_count: f64,
    pub order: f64,
}

impl Default for VoxelStats {
    fn default() -> Self {
        Self {
            population: 0,
            energy_solvent_solvent: 0.0,
            energy_solute_solvent: 0.0,
            dipole: Vector3::zeros(),
            neighbor_count: 0.0,
            order: 0.0,
        }
    }
}

impl VoxelStats {
    fn add_energy(&mut self, kind: EnergyKind, value: f64) {
        match kind {
            EnergyKind::SolventSolvent => self.energy_solvent_solvent += value,
            EnergyKind::SoluteSolvent => self.energy_solute_solvent += value,
        }
    }
}

/// Mutable per-voxel state fed frame by frame.
///
/// Frames are opened with [`begin_frame`](Self::begin_frame), which needs exclusive access.
/// Within a frame every other operation takes `&self` and may be called from many threads;
/// updates to the same voxel serialize on that voxel's lock.
#[derive(Debug)]
pub struct PerVoxelAccumulator {
    grid: Grid,
    stats: Vec<Mutex<VoxelStats>>,
    samples: SampleStore,
    /// Indexed `[species][voxel]`.
    atom_counts: Vec<Vec<AtomicU64>>,
    n_frames: u64,
}

impl PerVoxelAccumulator {
    pub fn new(config: &GistConfig) -> Result<Self, EngineError> {
        let grid = config.grid.grid().map_err(ConfigError::from)?;
        let n_voxels = grid.n_voxels();
        Ok(Self {
            stats: (0..n_voxels)
                .map(|_| Mutex::new(VoxelStats::default()))
                .collect(),
            samples: SampleStore::new(n_voxels),
            atom_counts: config
                .solvent_species
                .iter()
                .map(|_| (0..n_voxels).map(|_| AtomicU64::new(0)).collect())
                .collect(),
            grid,
            n_frames: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn n_frames(&self) -> u64 {
        self.n_frames
    }

    /// Opens the next frame and returns its 1-based id.
    pub fn begin_frame(&mut self) -> u64 {
        self.n_frames += 1;
        self.n_frames
    }

    /// Voxel of `position`, `None` when it lies off the grid.
    pub fn locate(&self, position: &Point3<f64>) -> Option<usize> {
        self.grid.locate(position)
    }

    fn slot(&self, voxel: usize) -> Result<&Mutex<VoxelStats>, EngineError> {
        self.stats.get(voxel).ok_or(EngineError::VoxelOutOfRange {
            voxel,
            n_voxels: self.stats.len(),
        })
    }

    fn current_frame(&self) -> Result<u64, EngineError> {
        if self.n_frames == 0 {
            return Err(EngineError::Internal(
                "sample recorded before the first frame was opened".to_string(),
            ));
        }
        Ok(self.n_frames)
    }

    /// Binds a sample to `voxel`: bumps the population and stores the sample. The sample's
    /// frame id is set to the current frame.
    pub fn record(&self, voxel: usize, mut sample: Sample) -> Result<(), EngineError> {
        let slot = self.slot(voxel)?;
        sample.frame = self.current_frame()?;
        let mut stats = slot.lock();
        stats.population += 1;
        self.samples.record(voxel, sample);
        Ok(())
    }

    pub fn accumulate_energy(
        &self,
        voxel: usize,
        kind: EnergyKind,
        value: f64,
    ) -> Result<(), EngineError> {
        self.slot(voxel)?.lock().add_energy(kind, value);
        Ok(())
    }

    pub fn accumulate_dipole(&self, voxel: usize, dipole: &Vector3<f64>) -> Result<(), EngineError> {
        self.slot(voxel)?.lock().dipole += dipole;
        Ok(())
    }

    pub fn accumulate_neighbor_count(&self, voxel: usize, count: f64) -> Result<(), EngineError> {
        self.slot(voxel)?.lock().neighbor_count += count;
        Ok(())
    }

    pub fn accumulate_order(&self, voxel: usize, value: f64) -> Result<(), EngineError> {
        self.slot(voxel)?.lock().order += value;
        Ok(())
    }

    /// Counts one solvent atom of the configured species `species` in `voxel`.
    pub fn accumulate_atom(&self, species: usize, voxel: usize) -> Result<(), EngineError> {
        let counts = self
            .atom_counts
            .get(species)
            .ok_or(EngineError::SpeciesOutOfRange {
                species,
                n_species: self.atom_counts.len(),
            })?;
        let count = counts.get(voxel).ok_or(EngineError::VoxelOutOfRange {
            voxel,
            n_voxels: counts.len(),
        })?;
        count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Bins one observation of the current frame and folds all of its quantities into the
    /// voxel under a single lock. Returns the voxel, or `None` if the molecule is off-grid.
    pub fn bind_observation(
        &self,
        observation: &SolventObservation,
    ) -> Result<Option<usize>, EngineError> {
        let Some(voxel) = self.grid.locate(&observation.position) else {
            return Ok(None);
        };
        let frame = self.current_frame()?;
        let slot = self.slot(voxel)?;
        let mut stats = slot.lock();
        stats.population += 1;
        stats.add_energy(EnergyKind::SolventSolvent, observation.solvent_solvent_energy);
        stats.add_energy(EnergyKind::SoluteSolvent, observation.solute_solvent_energy);
        stats.dipole += observation.dipole;
        stats.neighbor_count += observation.neighbor_count;
        if let Some(order) = observation.order {
            stats.order += order;
        }
        self.samples.record(
            voxel,
            Sample::new(observation.position, observation.orientation, frame),
        );
        Ok(Some(voxel))
    }

    /// Ends accumulation. The result is immutable and safe to share across threads.
    pub fn freeze(self) -> AccumulatedGrid {
        AccumulatedGrid {
            grid: self.grid,
            stats: self.stats.into_iter().map(Mutex::into_inner).collect(),
            samples: self.samples.freeze(),
            atom_counts: self
                .atom_counts
                .into_iter()
                .map(|counts| counts.into_iter().map(AtomicU64::into_inner).collect())
                .collect(),
            n_frames: self.n_frames,
        }
    }
}

/// Final sums and samples of a trajectory pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulatedGrid {
    grid: Grid,
    stats: Vec<VoxelStats>,
    samples: FrozenSamples,
    atom_counts: Vec<Vec<u64>>,
    n_frames: u64,
}

impl AccumulatedGrid {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self, voxel: usize) -> Option<&VoxelStats> {
        self.stats.get(voxel)
    }

    pub fn samples(&self) -> &FrozenSamples {
        &self.samples
    }

    /// Atom count of species `species` in `voxel`, zero when either is out of range.
    pub fn atom_count(&self, species: usize, voxel: usize) -> u64 {
        self.atom_counts
            .get(species)
            .and_then(|counts| counts.get(voxel))
            .copied()
            .unwrap_or(0)
    }

    pub fn n_species(&self) -> usize {
        self.atom_counts.len()
    }

    pub fn n_frames(&self) -> u64 {
        self.n_frames
    }
}
