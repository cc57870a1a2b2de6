use super::format_number;
use crate::core::grid::Grid;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const VALUES_PER_LINE: usize = 3;

/// Writes one scalar field over `grid` in OpenDX format.
///
/// `data` is indexed by linear voxel index, which already has `k` varying fastest as the
/// format expects.
///
/// # Errors
///
/// Returns `InvalidInput` if `data` does not hold exactly one value per voxel, or any
/// error from the underlying writer.
pub fn write_dx(grid: &Grid, data: &[f64], writer: &mut impl Write) -> io::Result<()> {
    if data.len() != grid.n_voxels() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "DX field holds {} values but the grid has {} voxels",
                data.len(),
                grid.n_voxels()
            ),
        ));
    }
    let [nx, ny, nz] = grid.dimensions();
    let origin = grid.origin();
    let h = format_number(grid.spacing());

    writeln!(writer, "object 1 class gridpositions counts {} {} {}", nx, ny, nz)?;
    writeln!(
        writer,
        "origin {} {} {}",
        format_number(origin.x),
        format_number(origin.y),
        format_number(origin.z)
    )?;
    writeln!(writer, "delta {} 0 0", h)?;
    writeln!(writer, "delta 0 {} 0", h)?;
    writeln!(writer, "delta 0 0 {}", h)?;
    writeln!(writer, "object 2 class gridconnections counts {} {} {}", nx, ny, nz)?;
    writeln!(
        writer,
        "object 3 class array type double rank 0 items {} data follows",
        grid.n_voxels()
    )?;
    for chunk in data.chunks(VALUES_PER_LINE) {
        let line: Vec<String> = chunk.iter().map(|v| format_number(*v)).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}

pub fn write_dx_to_path<P: AsRef<Path>>(grid: &Grid, data: &[f64], path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_dx(grid, data, &mut writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_header_and_three_values_per_line() {
        let grid = Grid::new(Point3::new(-1.0, 0.0, 0.5), [1, 2, 2], 0.5).unwrap();
        let mut out = Vec::new();
        write_dx(&grid, &[1.0, 2.0, 3.0, 4.5], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "object 1 class gridpositions counts 1 2 2");
        assert_eq!(lines[1], "origin -1 0 0.5");
        assert_eq!(lines[2], "delta 0.5 0 0");
        assert_eq!(lines[3], "delta 0 0.5 0");
        assert_eq!(lines[4], "delta 0 0 0.5");
        assert_eq!(lines[5], "object 2 class gridconnections counts 1 2 2");
        assert_eq!(
            lines[6],
            "object 3 class array type double rank 0 items 4 data follows"
        );
        assert_eq!(lines[7], "1 2 3");
        assert_eq!(lines[8], "4.5");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn rejects_field_of_wrong_length() {
        let grid = Grid::new(Point3::origin(), [2, 2, 2], 1.0).unwrap();
        let err = write_dx(&grid, &[0.0; 7], &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn writes_to_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("population.dx");
        let grid = Grid::new(Point3::origin(), [1, 1, 3], 1.0).unwrap();
        write_dx_to_path(&grid, &[0.0, 1.0, 0.0], &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("0 1 0\n"));
    }
}
