use nalgebra::{Point3, Vector3};

/// Charge-weighted position sum of a molecule, in e·Å.
pub fn dipole_sum(charges: &[f64], positions: &[Point3<f64>]) -> Vector3<f64> {
    charges
        .iter()
        .zip(positions)
        .fold(Vector3::zeros(), |acc, (q, p)| acc + p.coords * *q)
}

/// Mass-weighted center. Returns `None` for an empty or massless molecule.
pub fn center_of_mass(masses: &[f64], positions: &[Point3<f64>]) -> Option<Point3<f64>> {
    let total: f64 = masses.iter().zip(positions).map(|(m, _)| *m).sum();
    if total <= 0.0 {
        return None;
    }
    let weighted = masses
        .iter()
        .zip(positions)
        .fold(Vector3::zeros(), |acc, (m, p)| acc + p.coords * *m);
    Some(Point3::from(weighted / total))
}

/// Tetrahedral order parameter `q = 1 - 3/8 Σ (cos θ_ab + 1/3)²` over the six angles
/// spanned by the vectors to the four nearest neighbors.
///
/// A perfect tetrahedron gives 1, an ideal gas averages 0.
pub fn tetrahedral_order(neighbors: &[Vector3<f64>; 4]) -> f64 {
    let mut sum = 0.0;
    for a in 0..3 {
        for b in (a + 1)..4 {
            let denom = neighbors[a].norm() * neighbors[b].norm();
            let cos = if denom > 0.0 {
                neighbors[a].dot(&neighbors[b]) / denom
            } else {
                0.0
            };
            let term = cos + 1.0 / 3.0;
            sum += term * term;
        }
    }
    1.0 - 3.0 / 8.0 * sum
}
