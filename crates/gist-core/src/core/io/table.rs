use super::format_number;
use nalgebra::Point3;
use std::io::{self, Write};

/// Column titles of the per-voxel scalar fields, in output order.
pub const FIELD_COLUMNS: [&str; 18] = [
    "population",
    "dTSt_d(kcal/mol)",
    "dTSt_n(kcal/mol)",
    "dTSo_d(kcal/mol)",
    "dTSo_n(kcal/mol)",
    "dTSs_d(kcal/mol)",
    "dTSs_n(kcal/mol)",
    "Esw_d(kcal/mol)",
    "Esw_n(kcal/mol)",
    "Eww_d(kcal/mol)",
    "Eww_n(kcal/mol)",
    "dipoleX",
    "dipoleY",
    "dipoleZ",
    "dipole",
    "neighbour_d",
    "neighbour_n",
    "order_n",
];

#[derive(Debug, Clone, PartialEq)]
pub struct TableHeader {
    pub reference_density: f64,
    pub n_frames: u64,
    /// Solvent species with a `g_<name>` density column after the fixed fields.
    pub species: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    pub voxel: usize,
    pub center: Point3<f64>,
    pub fields: [f64; 18],
    pub densities: &'a [f64],
}

/// Writes the GIST table: a title line, a column line, then one line per voxel.
pub fn write_table<'a>(
    header: &TableHeader,
    rows: impl IntoIterator<Item = TableRow<'a>>,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        writer,
        "GIST calculation output. rho0 = {}, n_frames = {}",
        format_number(header.reference_density),
        header.n_frames
    )?;
    let mut columns = vec!["voxel", "x", "y", "z"];
    columns.extend(FIELD_COLUMNS);
    let density_columns: Vec<String> = header.species.iter().map(|s| format!("g_{}", s)).collect();
    columns.extend(density_columns.iter().map(String::as_str));
    writeln!(writer, "{}", columns.join(" "))?;

    for row in rows {
        if row.densities.len() != header.species.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "voxel {} has {} density values for {} species",
                    row.voxel,
                    row.densities.len(),
                    header.species.len()
                ),
            ));
        }
        write!(
            writer,
            "{} {} {} {}",
            row.voxel,
            format_number(row.center.x),
            format_number(row.center.y),
            format_number(row.center.z)
        )?;
        for value in row.fields.iter().chain(row.densities) {
            write!(writer, " {}", format_number(*value))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
