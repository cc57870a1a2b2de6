use super::accumulator::AccumulatedGrid;
use super::config::GistConfig;
use super::entropy::nearest_neighbor::NearestNeighborEstimator;
use super::entropy::orientational::orientational_entropy;
use super::entropy::statistics::{SearchStatistics, SearchSummary};
use super::entropy::{EntropyContext, EntropyError, ScaledValue};
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::constants::DEBYE_EA;
use crate::core::grid::Grid;
use crate::core::io::dx::write_dx_to_path;
use crate::core::io::table::{TableHeader, TableRow, write_table};
use nalgebra::Vector3;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The scalar fields produced for every voxel, in table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Population,
    TranslationalDens,
    TranslationalNorm,
    OrientationalDens,
    OrientationalNorm,
    SixDens,
    SixNorm,
    SoluteSolventDens,
    SoluteSolventNorm,
    SolventSolventDens,
    SolventSolventNorm,
    DipoleX,
    DipoleY,
    DipoleZ,
    DipoleMagnitude,
    NeighborDens,
    NeighborNorm,
    OrderNorm,
}

impl Field {
    pub const ALL: [Field; 18] = [
        Field::Population,
        Field::TranslationalDens,
        Field::TranslationalNorm,
        Field::OrientationalDens,
        Field::OrientationalNorm,
        Field::SixDens,
        Field::SixNorm,
        Field::SoluteSolventDens,
        Field::SoluteSolventNorm,
        Field::SolventSolventDens,
        Field::SolventSolventNorm,
        Field::DipoleX,
        Field::DipoleY,
        Field::DipoleZ,
        Field::DipoleMagnitude,
        Field::NeighborDens,
        Field::NeighborNorm,
        Field::OrderNorm,
    ];

    /// File stem used when the field is exported as a volumetric grid.
    pub fn name(self) -> &'static str {
        match self {
            Field::Population => "population",
            Field::TranslationalDens => "dTStrans_dens",
            Field::TranslationalNorm => "dTStrans_norm",
            Field::OrientationalDens => "dTSorient_dens",
            Field::OrientationalNorm => "dTSorient_norm",
            Field::SixDens => "dTSsix_dens",
            Field::SixNorm => "dTSsix_norm",
            Field::SoluteSolventDens => "Esw_dens",
            Field::SoluteSolventNorm => "Esw_norm",
            Field::SolventSolventDens => "Eww_dens",
            Field::SolventSolventNorm => "Eww_norm",
            Field::DipoleX => "dipole_x",
            Field::DipoleY => "dipole_y",
            Field::DipoleZ => "dipole_z",
            Field::DipoleMagnitude => "dipole_g",
            Field::NeighborDens => "neighbour_dens",
            Field::NeighborNorm => "neighbour_norm",
            Field::OrderNorm => "order_norm",
        }
    }
}

/// Derived quantities of one voxel. All zero for an empty voxel.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelFields {
    pub population: u64,
    pub translational: ScaledValue,
    pub orientational: ScaledValue,
    pub six: ScaledValue,
    pub solute_solvent_energy: ScaledValue,
    pub solvent_solvent_energy: ScaledValue,
    /// Dipole density in Debye/Å³.
    pub dipole: Vector3<f64>,
    pub dipole_magnitude: f64,
    pub neighbors: ScaledValue,
    pub order: f64,
    /// `g_X` of every configured solvent species, relative to bulk.
    pub atom_densities: Vec<f64>,
}

impl VoxelFields {
    pub fn empty(n_species: usize) -> Self {
        Self {
            population: 0,
            translational: ScaledValue::ZERO,
            orientational: ScaledValue::ZERO,
            six: ScaledValue::ZERO,
            solute_solvent_energy: ScaledValue::ZERO,
            solvent_solvent_energy: ScaledValue::ZERO,
            dipole: Vector3::zeros(),
            dipole_magnitude: 0.0,
            neighbors: ScaledValue::ZERO,
            order: 0.0,
            atom_densities: vec![0.0; n_species],
        }
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Population => self.population as f64,
            Field::TranslationalDens => self.translational.dens,
            Field::TranslationalNorm => self.translational.norm,
            Field::OrientationalDens => self.orientational.dens,
            Field::OrientationalNorm => self.orientational.norm,
            Field::SixDens => self.six.dens,
            Field::SixNorm => self.six.norm,
            Field::SoluteSolventDens => self.solute_solvent_energy.dens,
            Field::SoluteSolventNorm => self.solute_solvent_energy.norm,
            Field::SolventSolventDens => self.solvent_solvent_energy.dens,
            Field::SolventSolventNorm => self.solvent_solvent_energy.norm,
            Field::DipoleX => self.dipole.x,
            Field::DipoleY => self.dipole.y,
            Field::DipoleZ => self.dipole.z,
            Field::DipoleMagnitude => self.dipole_magnitude,
            Field::NeighborDens => self.neighbors.dens,
            Field::NeighborNorm => self.neighbors.norm,
            Field::OrderNorm => self.order,
        }
    }

    pub fn columns(&self) -> [f64; 18] {
        Field::ALL.map(|field| self.get(field))
    }
}

/// Every per-voxel field of a finished run plus its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct GistResult {
    pub grid: Grid,
    pub n_frames: u64,
    pub reference_density: f64,
    pub species: Vec<String>,
    /// Indexed by linear voxel index.
    pub voxels: Vec<VoxelFields>,
    pub diagnostics: SearchSummary,
}

impl GistResult {
    /// One field over the whole grid, in linear voxel order.
    pub fn field(&self, field: Field) -> Vec<f64> {
        self.voxels.iter().map(|v| v.get(field)).collect()
    }

    /// `g_X` of one species over the whole grid.
    pub fn atom_density(&self, species: usize) -> Option<Vec<f64>> {
        if species >= self.species.len() {
            return None;
        }
        Some(
            self.voxels
                .iter()
                .map(|v| v.atom_densities.get(species).copied().unwrap_or(0.0))
                .collect(),
        )
    }

    pub fn write_table(&self, writer: &mut impl Write) -> io::Result<()> {
        let header = TableHeader {
            reference_density: self.reference_density,
            n_frames: self.n_frames,
            species: self.species.clone(),
        };
        let rows = self.voxels.iter().enumerate().map(|(voxel, fields)| {
            let center = self
                .grid
                .coords_of(voxel)
                .map(|c| self.grid.voxel_center(c))
                .unwrap_or_else(|| self.grid.origin());
            TableRow {
                voxel,
                center,
                fields: fields.columns(),
                densities: &fields.atom_densities,
            }
        });
        write_table(&header, rows, writer)
    }

    /// Writes every field and every `g_X` density as `<name>.dx` into `dir`.
    pub fn write_dx_files(&self, dir: &Path) -> io::Result<()> {
        for field in Field::ALL {
            let path = dir.join(format!("{}.dx", field.name()));
            write_dx_to_path(&self.grid, &self.field(field), path)?;
        }
        for (index, name) in self.species.iter().enumerate() {
            if let Some(data) = self.atom_density(index) {
                write_dx_to_path(&self.grid, &data, dir.join(format!("g_{}.dx", name)))?;
            }
        }
        Ok(())
    }
}

/// Turns frozen accumulation results into per-voxel fields.
pub struct Postprocessor<'a> {
    accumulated: &'a AccumulatedGrid,
    config: &'a GistConfig,
}

impl<'a> Postprocessor<'a> {
    pub fn new(accumulated: &'a AccumulatedGrid, config: &'a GistConfig) -> Self {
        Self {
            accumulated,
            config,
        }
    }

    fn context(&self) -> EntropyContext {
        EntropyContext {
            temperature: self.config.temperature,
            reference_density: self.config.reference_density,
            n_frames: self.accumulated.n_frames(),
            voxel_volume: self.accumulated.grid().voxel_volume(),
        }
    }

    /// Processes every voxel once. Read-only over the accumulated data, so calling it again
    /// yields identical output.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyTrajectory`] if no frame was accumulated, or the first
    /// [`EntropyError`] raised by any voxel.
    #[instrument(skip_all, name = "postprocess_task")]
    pub fn run(&self, reporter: &ProgressReporter) -> Result<GistResult, EngineError> {
        let n_frames = self.accumulated.n_frames();
        if n_frames == 0 {
            return Err(EngineError::EmptyTrajectory);
        }
        if self.accumulated.n_species() != self.config.solvent_species.len() {
            return Err(EngineError::Internal(format!(
                "accumulated {} solvent species but {} are configured",
                self.accumulated.n_species(),
                self.config.solvent_species.len()
            )));
        }

        let grid = self.accumulated.grid();
        let context = self.context();
        let statistics = SearchStatistics::new();
        let estimator = NearestNeighborEstimator::new(
            grid,
            self.accumulated.samples(),
            context,
            &statistics,
        );
        info!(
            n_voxels = grid.n_voxels(),
            n_frames,
            n_samples = self.accumulated.samples().total_samples(),
            "Computing per-voxel fields."
        );
        reporter.report(Progress::TaskStart {
            total_steps: grid.n_voxels() as u64,
        });

        #[cfg(not(feature = "parallel"))]
        let iterator = 0..grid.n_voxels();

        #[cfg(feature = "parallel")]
        let iterator = (0..grid.n_voxels()).into_par_iter();

        let voxels = iterator
            .map(|voxel| {
                let fields = self.process_voxel(voxel, &estimator, &context);
                reporter.report(Progress::TaskIncrement);
                fields
            })
            .collect::<Result<Vec<_>, EntropyError>>()?;
        reporter.report(Progress::TaskFinish);

        let diagnostics = statistics.summary();
        log_search_summary(&diagnostics);

        Ok(GistResult {
            grid: grid.clone(),
            n_frames,
            reference_density: self.config.reference_density,
            species: self
                .config
                .solvent_species
                .iter()
                .map(|s| s.name.clone())
                .collect(),
            voxels,
            diagnostics,
        })
    }

    fn process_voxel(
        &self,
        voxel: usize,
        estimator: &NearestNeighborEstimator,
        context: &EntropyContext,
    ) -> Result<VoxelFields, EntropyError> {
        let n_species = self.config.solvent_species.len();
        let mut fields = VoxelFields::empty(n_species);
        let Some(stats) = self.accumulated.stats(voxel) else {
            return Ok(fields);
        };
        let frame_volume = context.n_frames as f64 * context.voxel_volume;

        fields.dipole = stats.dipole / (DEBYE_EA * frame_volume);
        fields.dipole_magnitude = fields.dipole.norm();
        for (index, species) in self.config.solvent_species.iter().enumerate() {
            let count = self.accumulated.atom_count(index, voxel) as f64;
            fields.atom_densities[index] = count
                / (frame_volume * context.reference_density * species.atoms_per_molecule as f64);
        }

        if stats.population == 0 {
            return Ok(fields);
        }
        let population = stats.population as usize;
        let per_molecule = |sum: f64| {
            let norm = sum / stats.population as f64;
            ScaledValue {
                norm,
                dens: context.density(norm, population),
            }
        };

        fields.population = stats.population;
        fields.orientational =
            orientational_entropy(self.accumulated.samples().samples(voxel), context);
        let nearest = estimator.estimate(voxel)?;
        fields.translational = nearest.translational;
        fields.six = nearest.six;
        fields.solute_solvent_energy = per_molecule(stats.energy_solute_solvent);
        fields.solvent_solvent_energy = per_molecule(stats.energy_solvent_solvent);
        fields.neighbors = per_molecule(stats.neighbor_count);
        fields.order = stats.order / stats.population as f64;
        Ok(fields)
    }
}

fn log_search_summary(summary: &SearchSummary) {
    if summary.translational_failures > 0 || summary.six_failures > 0 {
        warn!(
            translational_failures = summary.translational_failures,
            translational_percent = summary.translational_failure_percent(),
            six_failures = summary.six_failures,
            six_percent = summary.six_failure_percent(),
            total_searches = summary.total,
            "Some nearest-neighbor searches could not be proven exact within the grid."
        );
    } else {
        info!(
            total_searches = summary.total,
            "All nearest-neighbor searches resolved within one voxel edge."
        );
    }
    info!(
        concerning_neighbors = summary.concerning_neighbors,
        "Neighbors from nearby frames counted."
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orientation::Orientation;
    use crate::core::sample::SolventObservation;
    use crate::engine::accumulator::PerVoxelAccumulator;
    use crate::engine::config::{GistConfigBuilder, SolventSpecies};
    use nalgebra::{Point3, UnitQuaternion};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use tempfile::tempdir;

    fn config(n: usize) -> GistConfig {
        GistConfigBuilder::new()
            .origin(Point3::origin())
            .dimensions([n, n, n])
            .spacing(1.0)
            .temperature(300.0)
            .reference_density(0.0329)
            .solvent_species(SolventSpecies {
                name: "O".to_string(),
                atoms_per_molecule: 1,
            })
            .solvent_species(SolventSpecies {
                name: "H".to_string(),
                atoms_per_molecule: 2,
            })
            .build()
            .unwrap()
    }

    fn random_run(config: &GistConfig, frames: u64, per_frame: usize) -> AccumulatedGrid {
        let mut rng = StdRng::seed_from_u64(11);
        let mut acc = PerVoxelAccumulator::new(config).unwrap();
        let extent = config.grid.dimensions[0] as f64;
        for _ in 0..frames {
            acc.begin_frame();
            for _ in 0..per_frame {
                let position = Point3::new(
                    rng.gen_range(0.0..extent),
                    rng.gen_range(0.0..extent),
                    rng.gen_range(0.0..extent),
                );
                let q = UnitQuaternion::from_euler_angles(
                    rng.gen_range(-3.0..3.0),
                    rng.gen_range(-1.5..1.5),
                    rng.gen_range(-3.0..3.0),
                );
                let mut obs = SolventObservation::at(position, q.into());
                obs.solvent_solvent_energy = rng.gen_range(-20.0..0.0);
                obs.solute_solvent_energy = rng.gen_range(-5.0..1.0);
                obs.dipole = Vector3::new(0.1, -0.2, 0.3);
                obs.neighbor_count = rng.gen_range(0..6) as f64;
                obs.order = Some(rng.gen_range(0.0..1.0));
                if let Some(voxel) = acc.bind_observation(&obs).unwrap() {
                    acc.accumulate_atom(0, voxel).unwrap();
                    acc.accumulate_atom(1, voxel).unwrap();
                    acc.accumulate_atom(1, voxel).unwrap();
                }
            }
        }
        acc.freeze()
    }

    #[test]
    fn empty_voxels_emit_all_zero_fields() {
        let config = config(3);
        let mut acc = PerVoxelAccumulator::new(&config).unwrap();
        acc.begin_frame();
        let result = Postprocessor::new(&acc.freeze(), &config)
            .run(&ProgressReporter::new())
            .unwrap();
        assert_eq!(result.voxels.len(), 27);
        for voxel in &result.voxels {
            assert_eq!(voxel, &VoxelFields::empty(2));
            assert!(voxel.columns().iter().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn empty_trajectory_is_rejected() {
        let config = config(3);
        let acc = PerVoxelAccumulator::new(&config).unwrap();
        let err = Postprocessor::new(&acc.freeze(), &config)
            .run(&ProgressReporter::new())
            .unwrap_err();
        assert!(matches!(err, EngineError::EmptyTrajectory));
    }

    #[test]
    fn density_scaled_values_follow_from_normalized_values() {
        let config = config(5);
        let accumulated = random_run(&config, 8, 60);
        let result = Postprocessor::new(&accumulated, &config)
            .run(&ProgressReporter::new())
            .unwrap();
        let frame_volume = 8.0 * 1.0;
        for voxel in &result.voxels {
            let pop = voxel.population as f64;
            for value in [
                voxel.translational,
                voxel.solute_solvent_energy,
                voxel.solvent_solvent_energy,
                voxel.neighbors,
            ] {
                assert_eq!(value.dens, value.norm * pop / frame_volume);
            }
            // every sample is oriented, so both orientation-aware counts equal the population
            assert_eq!(
                voxel.orientational.dens,
                voxel.orientational.norm * pop / frame_volume
            );
            assert_eq!(voxel.six.dens, voxel.six.norm * pop / frame_volume);
        }
    }

    #[test]
    fn energies_dipoles_and_densities_are_normalized() {
        let config = config(3);
        let mut acc = PerVoxelAccumulator::new(&config).unwrap();
        for x in [1.25, 1.75] {
            acc.begin_frame();
            let mut obs = SolventObservation::at(Point3::new(x, 1.5, 1.5), Orientation::identity());
            obs.solvent_solvent_energy = -10.0;
            obs.solute_solvent_energy = -4.0;
            obs.dipole = Vector3::new(DEBYE_EA, 0.0, 0.0);
            obs.neighbor_count = 4.0;
            obs.order = Some(0.5);
            acc.bind_observation(&obs).unwrap();
            acc.accumulate_atom(0, 13).unwrap();
            acc.accumulate_atom(1, 13).unwrap();
        }
        let result = Postprocessor::new(&acc.freeze(), &config)
            .run(&ProgressReporter::new())
            .unwrap();
        let voxel = &result.voxels[13];
        assert_eq!(voxel.population, 2);
        assert_eq!(voxel.solvent_solvent_energy.norm, -10.0);
        assert_eq!(voxel.solute_solvent_energy.norm, -4.0);
        assert_eq!(voxel.solute_solvent_energy.dens, -4.0);
        assert_eq!(voxel.neighbors.norm, 4.0);
        assert_eq!(voxel.order, 0.5);
        assert!((voxel.dipole.x - 1.0).abs() < 1e-12);
        assert!((voxel.dipole_magnitude - 1.0).abs() < 1e-12);
        assert!((voxel.atom_densities[0] - 1.0 / 0.0329).abs() < 1e-9);
        assert!((voxel.atom_densities[1] - 1.0 / (2.0 * 0.0329 * 2.0)).abs() < 1e-9);
    }

    #[test]
    fn running_twice_is_bit_identical() {
        let config = config(5);
        let accumulated = random_run(&config, 5, 80);
        let postprocessor = Postprocessor::new(&accumulated, &config);
        let first = postprocessor.run(&ProgressReporter::new()).unwrap();
        let second = postprocessor.run(&ProgressReporter::new()).unwrap();
        assert_eq!(first, second);
        assert!(first.diagnostics.total > 0);
    }

    #[test]
    fn reports_one_increment_per_voxel() {
        let config = config(3);
        let accumulated = random_run(&config, 2, 10);
        let increments = std::sync::atomic::AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::TaskIncrement = event {
                increments.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            }
        }));
        Postprocessor::new(&accumulated, &config)
            .run(&reporter)
            .unwrap();
        drop(reporter);
        assert_eq!(increments.into_inner(), 27);
    }

    #[test]
    fn writes_table_and_dx_files() {
        let config = config(3);
        let accumulated = random_run(&config, 2, 20);
        let result = Postprocessor::new(&accumulated, &config)
            .run(&ProgressReporter::new())
            .unwrap();

        let mut table = Vec::new();
        result.write_table(&mut table).unwrap();
        let text = String::from_utf8(table).unwrap();
        assert_eq!(text.lines().count(), 2 + 27);
        assert!(text.lines().nth(1).unwrap().ends_with("g_O g_H"));

        let dir = tempdir().unwrap();
        result.write_dx_files(dir.path()).unwrap();
        assert!(dir.path().join("population.dx").exists());
        assert!(dir.path().join("dTSsix_norm.dx").exists());
        assert!(dir.path().join("g_H.dx").exists());
    }
}
