//! Provides writers for finished GIST results.
//!
//! Two formats are supported: OpenDX volumetric grids, one scalar field per file, for
//! visualization programs, and the whitespace-separated GIST table holding every per-voxel
//! field of a run in one file.

pub mod dx;
pub mod table;

/// Shortest round-trip representation, switching to exponent notation for very small or
/// very large magnitudes.
pub(crate) fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || (1e-4..1e7).contains(&magnitude) || !value.is_finite() {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}
