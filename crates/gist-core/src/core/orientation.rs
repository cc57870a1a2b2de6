use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Largest value [`Orientation::distance`] can return.
pub const MAX_ORIENTATION_DISTANCE: f64 = PI;

const MIN_AXIS_LENGTH: f64 = 1e-3;

/// The orientational state of one solvent observation.
///
/// Monatomic solvents (ions) have no meaningful rotation and are carried as
/// [`Orientation::Rotationless`], so every consumer has to decide explicitly how to treat
/// them instead of testing a sentinel quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    Rotatable(UnitQuaternion<f64>),
    Rotationless,
}

impl Orientation {
    pub fn identity() -> Self {
        Orientation::Rotatable(UnitQuaternion::identity())
    }

    pub fn quaternion(&self) -> Option<&UnitQuaternion<f64>> {
        match self {
            Orientation::Rotatable(q) => Some(q),
            Orientation::Rotationless => None,
        }
    }

    pub fn is_rotatable(&self) -> bool {
        matches!(self, Orientation::Rotatable(_))
    }

    /// Rotation angle (radians, `0..=π`) taking one orientation onto the other.
    ///
    /// Returns `None` unless both orientations are rotatable.
    pub fn distance(&self, other: &Orientation) -> Option<f64> {
        match (self, other) {
            (Orientation::Rotatable(a), Orientation::Rotatable(b)) => {
                Some(quaternion_distance(a, b))
            }
            _ => None,
        }
    }

    /// Orientation of a molecule-fixed frame spanned by two in-molecule vectors.
    ///
    /// `x_axis` becomes the molecular x axis, the component of `xy_plane` orthogonal to it
    /// the y axis. The result rotates the molecular frame onto the lab frame. Degenerate or
    /// collinear inputs yield [`Orientation::Rotationless`].
    pub fn from_frame_vectors(x_axis: &Vector3<f64>, xy_plane: &Vector3<f64>) -> Self {
        if x_axis.norm() < MIN_AXIS_LENGTH || xy_plane.norm() < MIN_AXIS_LENGTH {
            return Orientation::Rotationless;
        }
        let ex = x_axis.normalize();
        let y_raw = xy_plane - ex * ex.dot(xy_plane);
        if y_raw.norm() < MIN_AXIS_LENGTH {
            return Orientation::Rotationless;
        }
        let ey = y_raw.normalize();
        let ez = ex.cross(&ey);
        let rotation = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[ex, ey, ez]));
        Orientation::Rotatable(UnitQuaternion::from_rotation_matrix(&rotation))
    }
}

impl From<UnitQuaternion<f64>> for Orientation {
    fn from(q: UnitQuaternion<f64>) -> Self {
        Orientation::Rotatable(q)
    }
}

/// `2·acos(|a·b|)`, evaluated through half-angle chords to stay accurate for nearly
/// identical orientations. `q` and `-q` are the same rotation.
pub fn quaternion_distance(a: &UnitQuaternion<f64>, b: &UnitQuaternion<f64>) -> f64 {
    let qa = a.quaternion().coords;
    let mut qb = b.quaternion().coords;
    if qa.dot(&qb) < 0.0 {
        qb = -qb;
    }
    let chord_minus = (qa - qb).norm();
    let chord_plus = (qa + qb).norm();
    4.0 * chord_minus.atan2(chord_plus)
}
