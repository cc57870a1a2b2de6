use itertools::iproduct;
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum GridError {
    #[error("Grid dimension along axis {axis} must be positive")]
    NonPositiveDimension { axis: usize },

    #[error("Voxel edge length must be positive and finite, got {0}")]
    InvalidSpacing(f64),

    #[error("Grid origin must be finite")]
    NonFiniteOrigin,

    #[error("Grid of {dimensions:?} voxels exceeds the addressable voxel count")]
    TooManyVoxels { dimensions: [usize; 3] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelCoords {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl VoxelCoords {
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// Largest per-axis index offset between two voxels.
    pub fn chebyshev_distance(&self, other: &VoxelCoords) -> usize {
        self.i
            .abs_diff(other.i)
            .max(self.j.abs_diff(other.j))
            .max(self.k.abs_diff(other.k))
    }
}

/// Immutable voxel geometry. Linear indices follow `i * (ny * nz) + j * nz + k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    origin: Point3<f64>,
    dimensions: [usize; 3],
    spacing: f64,
    voxel_volume: f64,
    n_voxels: usize,
}

impl Grid {
    pub fn new(origin: Point3<f64>, dimensions: [usize; 3], spacing: f64) -> Result<Self, GridError> {
        if let Some(axis) = dimensions.iter().position(|&d| d == 0) {
            return Err(GridError::NonPositiveDimension { axis });
        }
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(GridError::InvalidSpacing(spacing));
        }
        if !origin.coords.iter().all(|c| c.is_finite()) {
            return Err(GridError::NonFiniteOrigin);
        }
        let n_voxels = dimensions[0]
            .checked_mul(dimensions[1])
            .and_then(|n| n.checked_mul(dimensions[2]))
            .ok_or(GridError::TooManyVoxels { dimensions })?;
        Ok(Self {
            origin,
            dimensions,
            spacing,
            voxel_volume: spacing * spacing * spacing,
            n_voxels,
        })
    }

    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    pub fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn voxel_volume(&self) -> f64 {
        self.voxel_volume
    }

    pub fn n_voxels(&self) -> usize {
        self.n_voxels
    }

    pub fn locate(&self, position: &Point3<f64>) -> Option<usize> {
        self.locate_coords(position)
            .and_then(|coords| self.index_of(coords))
    }

    pub fn locate_coords(&self, position: &Point3<f64>) -> Option<VoxelCoords> {
        let relative = (position - self.origin) / self.spacing;
        let mut bins = [0usize; 3];
        for axis in 0..3 {
            let f = relative[axis];
            if !f.is_finite() || f < 0.0 {
                return None;
            }
            let bin = f.floor() as usize;
            if bin >= self.dimensions[axis] {
                return None;
            }
            bins[axis] = bin;
        }
        Some(VoxelCoords::new(bins[0], bins[1], bins[2]))
    }

    pub fn index_of(&self, coords: VoxelCoords) -> Option<usize> {
        let [nx, ny, nz] = self.dimensions;
        if coords.i >= nx || coords.j >= ny || coords.k >= nz {
            return None;
        }
        Some(coords.i * (ny * nz) + coords.j * nz + coords.k)
    }

    pub fn coords_of(&self, index: usize) -> Option<VoxelCoords> {
        if index >= self.n_voxels {
            return None;
        }
        let [_, ny, nz] = self.dimensions;
        Some(VoxelCoords::new(
            index / (ny * nz),
            (index / nz) % ny,
            index % nz,
        ))
    }

    pub fn voxel_center(&self, coords: VoxelCoords) -> Point3<f64> {
        self.origin
            + Vector3::new(
                coords.i as f64 + 0.5,
                coords.j as f64 + 0.5,
                coords.k as f64 + 0.5,
            ) * self.spacing
    }

    /// A voxel touching the minimum or maximum index along any axis.
    pub fn is_border(&self, coords: VoxelCoords) -> bool {
        let [nx, ny, nz] = self.dimensions;
        !(coords.i > 0
            && coords.i + 1 < nx
            && coords.j > 0
            && coords.j + 1 < ny
            && coords.k > 0
            && coords.k + 1 < nz)
    }

    /// Largest shell radius around `coords` that still contains at least one in-grid voxel.
    pub fn max_shell_radius(&self, coords: VoxelCoords) -> usize {
        let [nx, ny, nz] = self.dimensions;
        [
            coords.i.max(nx - 1 - coords.i),
            coords.j.max(ny - 1 - coords.j),
            coords.k.max(nz - 1 - coords.k),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Linear indices of the hollow cube of voxels at Chebyshev distance exactly `radius`
    /// from `center`, clipped to the grid. Radius 0 yields `center` itself.
    pub fn shell_voxels(
        &self,
        center: VoxelCoords,
        radius: usize,
    ) -> impl Iterator<Item = usize> + '_ {
        let [nx, ny, nz] = self.dimensions;
        let axis_range = move |c: usize, n: usize| {
            let lo = c.saturating_sub(radius);
            let hi = (c + radius).min(n - 1);
            lo..=hi
        };
        iproduct!(
            axis_range(center.i, nx),
            axis_range(center.j, ny),
            axis_range(center.k, nz)
        )
        .map(|(i, j, k)| VoxelCoords::new(i, j, k))
        .filter(move |c| c.chebyshev_distance(&center) == radius)
        .map(move |c| c.i * (ny * nz) + c.j * nz + c.k)
    }
}
