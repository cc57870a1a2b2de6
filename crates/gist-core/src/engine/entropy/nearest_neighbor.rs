use super::correction::six_volume_correction;
use super::statistics::SearchStatistics;
use super::{EntropyContext, EntropyError, ScaledValue};
use crate::core::constants::{CONCERNING_FRAME_DISTANCE, EULER_MASCHERONI};
use crate::core::grid::Grid;
use crate::engine::store::FrozenSamples;
use std::f64::consts::PI;

/// Result of one expanding-shell search. Distances are squared; `f64::INFINITY` means no
/// neighbor was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborSearch {
    /// Squared position distance to the nearest other sample, any orientation.
    pub nn_d: f64,
    /// Squared combined distance to the nearest other sample, both oriented.
    pub nn_s: f64,
    pub translational_neighbor_frame: Option<u64>,
    pub six_neighbor_frame: Option<u64>,
    /// Largest shell radius visited.
    pub radius: usize,
}

/// Finds the nearest neighbors of sample `index` of `voxel`, visiting hollow shells of
/// growing Chebyshev radius around the voxel.
///
/// A rotationless sample only looks at its own voxel. An oriented sample keeps expanding
/// until its six-dimensional answer is closer than anything beyond the current shell can
/// be, or the shell leaves the grid. Returns `None` for an invalid voxel or sample index.
pub fn search_nearest_neighbor(
    grid: &Grid,
    samples: &FrozenSamples,
    voxel: usize,
    index: usize,
) -> Option<NeighborSearch> {
    let coords = grid.coords_of(voxel)?;
    let sample = samples.samples(voxel).get(index)?;
    let max_radius = grid.max_shell_radius(coords);

    let mut result = NeighborSearch {
        nn_d: f64::INFINITY,
        nn_s: f64::INFINITY,
        translational_neighbor_frame: None,
        six_neighbor_frame: None,
        radius: 0,
    };
    let mut radius = 0;
    loop {
        for other_voxel in grid.shell_voxels(coords, radius) {
            for (j, other) in samples.samples(other_voxel).iter().enumerate() {
                if other_voxel == voxel && j == index {
                    continue;
                }
                let dd = sample.squared_distance(other);
                if dd < result.nn_d {
                    result.nn_d = dd;
                    result.translational_neighbor_frame = Some(other.frame);
                }
                if let Some(ds) = sample.squared_six_distance(other) {
                    if ds < result.nn_s {
                        result.nn_s = ds;
                        result.six_neighbor_frame = Some(other.frame);
                    }
                }
            }
        }
        result.radius = radius;

        if !sample.orientation.is_rotatable() {
            break;
        }
        let reach = radius as f64 * grid.spacing();
        if result.nn_s < reach * reach || radius >= max_radius {
            break;
        }
        radius += 1;
    }
    Some(result)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NearestNeighborEntropy {
    pub translational: ScaledValue,
    pub six: ScaledValue,
}

/// Translational and six-dimensional entropy of single voxels over frozen samples.
pub struct NearestNeighborEstimator<'a> {
    grid: &'a Grid,
    samples: &'a FrozenSamples,
    context: EntropyContext,
    statistics: &'a SearchStatistics,
}

impl<'a> NearestNeighborEstimator<'a> {
    pub fn new(
        grid: &'a Grid,
        samples: &'a FrozenSamples,
        context: EntropyContext,
        statistics: &'a SearchStatistics,
    ) -> Self {
        Self {
            grid,
            samples,
            context,
            statistics,
        }
    }

    /// Estimates the entropy of `voxel`.
    ///
    /// Border voxels yield zero without searching. Every searched sample is counted in the
    /// run statistics.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::CoincidentSamples`] if an oriented sample's six-dimensional
    /// nearest neighbor has exactly its position and orientation.
    pub fn estimate(&self, voxel: usize) -> Result<NearestNeighborEntropy, EntropyError> {
        let Some(coords) = self.grid.coords_of(voxel) else {
            return Ok(NearestNeighborEntropy::default());
        };
        if self.grid.is_border(coords) {
            return Ok(NearestNeighborEntropy::default());
        }
        let samples = self.samples.samples(voxel);
        if samples.is_empty() {
            return Ok(NearestNeighborEntropy::default());
        }

        let ctx = &self.context;
        let n_frames = ctx.n_frames as f64;
        let rho0 = ctx.reference_density;
        let safe_distance_sq = self.grid.spacing() * self.grid.spacing();

        let mut trans_sum = 0.0;
        let mut trans_contributions = 0usize;
        let mut six_sum = 0.0;
        let mut six_contributions = 0usize;
        let mut oriented = 0usize;

        for (index, sample) in samples.iter().enumerate() {
            let Some(search) = search_nearest_neighbor(self.grid, self.samples, voxel, index)
            else {
                continue;
            };
            let is_oriented = sample.orientation.is_rotatable();
            if is_oriented {
                oriented += 1;
            }

            if is_oriented && search.nn_s == 0.0 {
                return Err(EntropyError::CoincidentSamples {
                    voxel,
                    frame: sample.frame,
                    neighbor_frame: search.six_neighbor_frame.unwrap_or(sample.frame),
                });
            }
            self.statistics.record_search(
                search.nn_d,
                is_oriented.then_some(search.nn_s),
                safe_distance_sq,
            );
            if search
                .six_neighbor_frame
                .is_some_and(|f| f.abs_diff(sample.frame) <= CONCERNING_FRAME_DISTANCE)
            {
                self.statistics.record_concerning_neighbor();
            }

            // A neighbor at the same position (other orientation, or two ions) spans no volume.
            if search.nn_d.is_finite() && search.nn_d > 0.0 {
                let ball = search.nn_d.powf(1.5) * n_frames * 4.0 / 3.0 * PI * rho0;
                trans_sum += ball.ln();
                trans_contributions += 1;
            }
            if is_oriented && search.nn_s.is_finite() {
                let nn_s = search.nn_s;
                let six_volume =
                    nn_s * nn_s * nn_s * n_frames * PI * rho0 / 48.0 / six_volume_correction(nn_s);
                six_sum += six_volume.ln();
                six_contributions += 1;
            }
        }

        let kt = ctx.kt();
        let population = samples.len();
        let mut result = NearestNeighborEntropy::default();
        if trans_contributions > 0 {
            let norm = kt * (trans_sum / population as f64 + EULER_MASCHERONI);
            result.translational = ScaledValue {
                norm,
                dens: ctx.density(norm, population),
            };
        }
        if six_contributions > 0 {
            let norm = kt * (six_sum / oriented as f64 + EULER_MASCHERONI);
            result.six = ScaledValue {
                norm,
                dens: ctx.density(norm, oriented),
            };
        }
        Ok(result)
    }
}
