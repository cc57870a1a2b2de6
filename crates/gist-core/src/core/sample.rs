use super::orientation::Orientation;
use nalgebra::{Point3, Vector3};

/// One solvent molecule observed in one frame and bound to one voxel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Reference position used for binning (head atom or center of mass).
    pub position: Point3<f64>,
    pub orientation: Orientation,
    /// 1-based id of the frame the observation came from.
    pub frame: u64,
}

impl Sample {
    pub fn new(position: Point3<f64>, orientation: Orientation, frame: u64) -> Self {
        Self {
            position,
            orientation,
            frame,
        }
    }

    #[inline]
    pub fn squared_distance(&self, other: &Sample) -> f64 {
        (self.position - other.position).norm_squared()
    }

    /// Squared distance in the combined position + orientation space, `None` unless both
    /// samples carry an orientation.
    #[inline]
    pub fn squared_six_distance(&self, other: &Sample) -> Option<f64> {
        self.orientation
            .distance(&other.orientation)
            .map(|d| self.squared_distance(other) + d * d)
    }
}

/// Everything a topology/energy layer resolved about one solvent molecule in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SolventObservation {
    pub position: Point3<f64>,
    pub orientation: Orientation,
    /// Interaction energy with all other solvent molecules, kcal/mol.
    pub solvent_solvent_energy: f64,
    /// Interaction energy with the solute, kcal/mol.
    pub solute_solvent_energy: f64,
    /// Molecular dipole in e·Å.
    pub dipole: Vector3<f64>,
    pub neighbor_count: f64,
    /// Tetrahedral order parameter, when it could be computed.
    pub order: Option<f64>,
}

impl SolventObservation {
    /// An observation carrying only position and orientation.
    pub fn at(position: Point3<f64>, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
            solvent_solvent_energy: 0.0,
            solute_solvent_energy: 0.0,
            dipole: Vector3::zeros(),
            neighbor_count: 0.0,
            order: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::UnitQuaternion;

    #[test]
    fn six_distance_adds_squared_rotation_angle() {
        let a = Sample::new(Point3::origin(), Orientation::identity(), 1);
        let q = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.5);
        let b = Sample::new(Point3::new(0.3, 0.4, 0.0), q.into(), 4);
        assert!((a.squared_distance(&b) - 0.25).abs() < 1e-12);
        let six = a.squared_six_distance(&b).unwrap();
        assert!((six - (0.25 + 0.25)).abs() < 1e-12);
    }

    #[test]
    fn six_distance_requires_two_orientations() {
        let a = Sample::new(Point3::origin(), Orientation::identity(), 1);
        let b = Sample::new(Point3::new(1.0, 0.0, 0.0), Orientation::Rotationless, 1);
        assert_eq!(a.squared_six_distance(&b), None);
        assert_eq!(b.squared_six_distance(&a), None);
    }
}
