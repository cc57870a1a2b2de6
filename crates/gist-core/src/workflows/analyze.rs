use crate::core::sample::SolventObservation;
use crate::engine::accumulator::PerVoxelAccumulator;
use crate::engine::config::GistConfig;
use crate::engine::error::EngineError;
use crate::engine::postprocess::{GistResult, Postprocessor};
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One solvent atom of a configured species, for the `g_X` densities.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesAtom {
    /// Index into [`GistConfig::solvent_species`].
    pub species: usize,
    pub position: Point3<f64>,
}

/// Everything observed in one trajectory frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameObservations {
    pub solvents: Vec<SolventObservation>,
    pub atoms: Vec<SpeciesAtom>,
}

#[instrument(skip_all, name = "analyze_workflow")]
pub fn run(
    config: &GistConfig,
    frames: &[FrameObservations],
    reporter: &ProgressReporter,
) -> Result<GistResult, EngineError> {
    if frames.is_empty() {
        return Err(EngineError::EmptyTrajectory);
    }
    info!(
        n_frames = frames.len(),
        dimensions = ?config.grid.dimensions,
        spacing = config.grid.spacing,
        "Starting GIST analysis."
    );

    // === Phase 1: Accumulate every frame ===
    let accumulator = reporter.phase("Accumulation", || accumulate(config, frames, reporter))?;

    // === Phase 2: Post-process the frozen grid ===
    let accumulated = accumulator.freeze();
    let result = reporter.phase("Post-processing", || {
        Postprocessor::new(&accumulated, config).run(reporter)
    })?;

    let occupied = result.voxels.iter().filter(|v| v.population > 0).count();
    info!(
        occupied_voxels = occupied,
        total_voxels = result.voxels.len(),
        "Analysis complete."
    );
    Ok(result)
}

fn accumulate(
    config: &GistConfig,
    frames: &[FrameObservations],
    reporter: &ProgressReporter,
) -> Result<PerVoxelAccumulator, EngineError> {
    let mut accumulator = PerVoxelAccumulator::new(config)?;
    reporter.report(Progress::TaskStart {
        total_steps: frames.len() as u64,
    });

    for observations in frames {
        let frame = accumulator.begin_frame();

        #[cfg(not(feature = "parallel"))]
        let iterator = observations.solvents.iter();

        #[cfg(feature = "parallel")]
        let iterator = observations.solvents.par_iter();

        let bound = iterator
            .map(|observation| accumulator.bind_observation(observation))
            .collect::<Result<Vec<_>, EngineError>>()?;
        let on_grid = bound.iter().flatten().count();

        for atom in &observations.atoms {
            if let Some(voxel) = accumulator.locate(&atom.position) {
                accumulator.accumulate_atom(atom.species, voxel)?;
            }
        }

        debug!(
            frame,
            on_grid,
            off_grid = bound.len() - on_grid,
            "Frame accumulated."
        );
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    Ok(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{EULER_MASCHERONI, GAS_CONSTANT_KCAL};
    use crate::core::orientation::Orientation;
    use crate::engine::config::{GistConfigBuilder, SolventSpecies};
    use crate::engine::entropy::orientational::MIN_ORIENTATION_DISTANCE;
    use std::f64::consts::PI;
    use std::sync::Mutex;

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
            .build()
            .unwrap()
    }

    fn frame(positions: &[Point3<f64>]) -> FrameObservations {
        FrameObservations {
            solvents: positions
                .iter()
                .map(|p| SolventObservation::at(*p, Orientation::identity()))
                .collect(),
            atoms: positions
                .iter()
                .map(|p| SpeciesAtom {
                    species: 0,
                    position: *p,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_trajectory_is_rejected() {
        let err = run(&config(3), &[], &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::EmptyTrajectory));
    }

    #[test]
    fn two_identically_oriented_samples_give_the_closed_form_orientational_entropy() {
        let config = config(3);
        let frames = [
            frame(&[Point3::new(1.25, 1.5, 1.5)]),
            frame(&[Point3::new(1.75, 1.5, 1.5)]),
        ];
        let result = run(&config, &frames, &ProgressReporter::new()).unwrap();

        let voxel = &result.voxels[13];
        assert_eq!(voxel.population, 2);
        let d = MIN_ORIENTATION_DISTANCE;
        let expected = GAS_CONSTANT_KCAL
            * 300.0
            * ((d * d * d / 6.0 / PI).ln() + 2f64.ln() / 2.0 + EULER_MASCHERONI);
        assert!(voxel.orientational.norm.is_finite());
        assert!((voxel.orientational.norm - expected).abs() < 1e-9);

        let again = run(&config, &frames, &ProgressReporter::new()).unwrap();
        assert_eq!(result, again);
    }

    #[test]
    fn off_grid_molecules_are_ignored() {
        let config = config(3);
        let frames = [frame(&[Point3::new(1.5, 1.5, 1.5), Point3::new(10.0, 0.0, 0.0)])];
        let result = run(&config, &frames, &ProgressReporter::new()).unwrap();
        let total: u64 = result.voxels.iter().map(|v| v.population).sum();
        assert_eq!(total, 1);
        assert_eq!(result.n_frames, 1);
        assert!(result.voxels[13].atom_densities[0] > 0.0);
    }

    #[test]
    fn lone_central_sample_has_no_nearest_neighbor_entropy() {
        let config = config(5);
        let frames = [frame(&[Point3::new(2.5, 2.5, 2.5)])];
        let result = run(&config, &frames, &ProgressReporter::new()).unwrap();
        let voxel = &result.voxels[62];
        assert_eq!(voxel.population, 1);
        assert_eq!(voxel.translational.norm, 0.0);
        assert_eq!(voxel.six.norm, 0.0);
        assert_eq!(voxel.orientational.norm, 0.0);
        assert_eq!(result.diagnostics.total, 1);
        assert_eq!(result.diagnostics.translational_failures, 1);
        assert_eq!(result.diagnostics.six_failures, 1);
    }

    #[test]
    fn unknown_species_index_is_an_error() {
        let config = config(3);
        let mut observations = frame(&[Point3::new(1.5, 1.5, 1.5)]);
        observations.atoms[0].species = 3;
        let err = run(&config, &[observations], &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::SpeciesOutOfRange { species: 3, .. }));
    }

    #[test]
    fn reports_both_phases_in_order() {
        let config = config(3);
        let frames = [frame(&[Point3::new(1.5, 1.5, 1.5)])];
        let phases = Mutex::new(Vec::new());
        {
            let reporter = ProgressReporter::with_callback(Box::new(|event| {
                if let Progress::PhaseStart { name } = event {
                    phases.lock().unwrap().push(name);
                }
            }));
            run(&config, &frames, &reporter).unwrap();
        }
        assert_eq!(
            phases.into_inner().unwrap(),
            vec!["Accumulation", "Post-processing"]
        );
    }
}
