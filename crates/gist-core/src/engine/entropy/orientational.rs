use super::{EntropyContext, ScaledValue};
use crate::core::constants::EULER_MASCHERONI;
use crate::core::sample::Sample;
use std::f64::consts::PI;

/// Floor applied to nearest-neighbor rotation angles so identical orientations stay finite.
pub const MIN_ORIENTATION_DISTANCE: f64 = 1e-6;

const SERIES_THRESHOLD: f64 = 1e-3;

/// `d - sin(d)`, via its Taylor series where direct subtraction cancels.
fn angle_minus_sine(d: f64) -> f64 {
    if d < SERIES_THRESHOLD {
        let d3 = d * d * d;
        d3 / 6.0 - d3 * d * d / 120.0 + d3 * d3 * d / 5040.0
    } else {
        d - d.sin()
    }
}

/// Log of the SO(3) ball volume of radius `d`, normalized by the volume of SO(3).
pub(crate) fn orientation_volume_log(d: f64) -> f64 {
    (angle_minus_sine(d.max(MIN_ORIENTATION_DISTANCE)) / PI).ln()
}

/// Nearest orientation neighbor of `samples[index]` among the other samples of the same
/// voxel. `None` if the sample or every other sample is rotationless.
pub fn nearest_orientation_distance(samples: &[Sample], index: usize) -> Option<f64> {
    let sample = samples.get(index)?;
    samples
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .filter_map(|(_, other)| sample.orientation.distance(&other.orientation))
        .reduce(f64::min)
}

/// Orientational entropy of the samples bound to one voxel.
///
/// Requires at least two samples. Only samples whose nearest orientation neighbor exists
/// enter the average; with none of those the voxel contributes zero.
pub fn orientational_entropy(samples: &[Sample], ctx: &EntropyContext) -> ScaledValue {
    if samples.len() < 2 {
        return ScaledValue::ZERO;
    }
    let (sum, count) = (0..samples.len())
        .filter_map(|i| nearest_orientation_distance(samples, i))
        .fold((0.0, 0usize), |(sum, count), d| {
            (sum + orientation_volume_log(d), count + 1)
        });
    if count == 0 {
        return ScaledValue::ZERO;
    }
    let n = count as f64;
    let norm = ctx.kt() * (sum / n + n.ln() / n + EULER_MASCHERONI);
    ScaledValue {
        norm,
        dens: ctx.density(norm, count),
    }
}
