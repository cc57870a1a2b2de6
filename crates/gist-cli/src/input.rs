use crate::error::{CliError, Result};
use anyhow::{Context, anyhow, bail};
use gistpp::core::orientation::Orientation;
use gistpp::core::sample::SolventObservation;
use gistpp::engine::config::SolventSpecies;
use gistpp::workflows::analyze::{FrameObservations, SpeciesAtom};
use nalgebra::{Point3, Quaternion, UnitQuaternion, Vector3};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const MIN_QUATERNION_NORM: f64 = 1e-8;

/// One row of the solvent observation table.
#[derive(Debug, Deserialize)]
struct SolventRecord {
    frame: u64,
    x: f64,
    y: f64,
    z: f64,
    qw: Option<f64>,
    qx: Option<f64>,
    qy: Option<f64>,
    qz: Option<f64>,
    eww: f64,
    esw: f64,
    dipole_x: f64,
    dipole_y: f64,
    dipole_z: f64,
    neighbors: f64,
    #[serde(default)]
    order: Option<f64>,
}

impl SolventRecord {
    fn orientation(&self) -> anyhow::Result<Orientation> {
        match (self.qw, self.qx, self.qy, self.qz) {
            (None, None, None, None) => Ok(Orientation::Rotationless),
            (Some(w), Some(i), Some(j), Some(k)) => {
                let q = Quaternion::new(w, i, j, k);
                if !(q.norm() > MIN_QUATERNION_NORM) {
                    bail!("quaternion ({}, {}, {}, {}) has no usable norm", w, i, j, k);
                }
                Ok(Orientation::Rotatable(UnitQuaternion::from_quaternion(q)))
            }
            _ => bail!("quaternion columns must be either all set or all empty"),
        }
    }

    fn into_observation(self) -> anyhow::Result<SolventObservation> {
        Ok(SolventObservation {
            orientation: self.orientation()?,
            position: Point3::new(self.x, self.y, self.z),
            solvent_solvent_energy: self.eww,
            solute_solvent_energy: self.esw,
            dipole: Vector3::new(self.dipole_x, self.dipole_y, self.dipole_z),
            neighbor_count: self.neighbors,
            order: self.order,
        })
    }
}

#[derive(Debug, Deserialize)]
struct AtomRecord {
    frame: u64,
    species: String,
    x: f64,
    y: f64,
    z: f64,
}

/// A trajectory of pre-resolved observations, one entry per distinct frame value.
#[derive(Debug, Default)]
pub struct Trajectory {
    pub frame_ids: Vec<u64>,
    pub frames: Vec<FrameObservations>,
}

impl Trajectory {
    fn frame_mut(&mut self, frame_id: u64) -> Option<&mut FrameObservations> {
        let index = self.frame_ids.binary_search(&frame_id).ok()?;
        self.frames.get_mut(index)
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader)
}

/// Groups solvent rows into frames. Frame values must be non-decreasing.
fn read_solvents<R: Read>(reader: R) -> anyhow::Result<Trajectory> {
    let mut trajectory = Trajectory::default();
    for (row, record) in csv_reader(reader).deserialize::<SolventRecord>().enumerate() {
        let record = record.with_context(|| format!("row {}", row + 1))?;
        let frame_id = record.frame;
        match trajectory.frame_ids.last() {
            Some(&last) if frame_id < last => {
                bail!("row {}: frame {} appears after frame {}", row + 1, frame_id, last);
            }
            Some(&last) if frame_id == last => {}
            _ => {
                trajectory.frame_ids.push(frame_id);
                trajectory.frames.push(FrameObservations::default());
            }
        }
        let observation = record
            .into_observation()
            .with_context(|| format!("row {}", row + 1))?;
        if let Some(frame) = trajectory.frames.last_mut() {
            frame.solvents.push(observation);
        }
    }
    Ok(trajectory)
}

/// Attaches solvent atom positions to the frames they belong to.
fn read_atoms<R: Read>(
    reader: R,
    species: &[SolventSpecies],
    trajectory: &mut Trajectory,
) -> anyhow::Result<usize> {
    let mut count = 0;
    for (row, record) in csv_reader(reader).deserialize::<AtomRecord>().enumerate() {
        let record = record.with_context(|| format!("row {}", row + 1))?;
        let index = species
            .iter()
            .position(|s| s.name == record.species)
            .ok_or_else(|| {
                anyhow!(
                    "row {}: species '{}' is not configured",
                    row + 1,
                    record.species
                )
            })?;
        let frame = trajectory.frame_mut(record.frame).ok_or_else(|| {
            anyhow!(
                "row {}: frame {} has no solvent observations",
                row + 1,
                record.frame
            )
        })?;
        frame.atoms.push(SpeciesAtom {
            species: index,
            position: Point3::new(record.x, record.y, record.z),
        });
        count += 1;
    }
    Ok(count)
}

fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(CliError::Io)
}

/// Loads the solvent table and, when given, the solvent atom table.
pub fn load_trajectory(
    solvents: &Path,
    atoms: Option<&Path>,
    species: &[SolventSpecies],
) -> Result<Trajectory> {
    debug!("Reading solvent observations from {:?}", solvents);
    let mut trajectory = read_solvents(open(solvents)?).map_err(|source| CliError::FileParsing {
        path: solvents.to_path_buf(),
        source,
    })?;

    if let Some(atoms) = atoms {
        if species.is_empty() {
            return Err(CliError::Argument(
                "--atoms requires at least one `solvent-species` entry in the config file"
                    .to_string(),
            ));
        }
        debug!("Reading solvent atoms from {:?}", atoms);
        let n_atoms = read_atoms(open(atoms)?, species, &mut trajectory).map_err(|source| {
            CliError::FileParsing {
                path: atoms.to_path_buf(),
                source,
            }
        })?;
        debug!(n_atoms, "Solvent atoms attached to frames.");
    }

    info!(
        n_frames = trajectory.frames.len(),
        n_observations = trajectory.frames.iter().map(|f| f.solvents.len()).sum::<usize>(),
        "Trajectory loaded."
    );
    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HEADER: &str = "frame,x,y,z,qw,qx,qy,qz,eww,esw,dipole_x,dipole_y,dipole_z,neighbors,order";

    fn species() -> Vec<SolventSpecies> {
        vec![
            SolventSpecies {
                name: "O".to_string(),
                atoms_per_molecule: 1,
            },
            SolventSpecies {
                name: "H".to_string(),
                atoms_per_molecule: 2,
            },
        ]
    }

    #[test]
    fn rows_are_grouped_into_frames() {
        let table = format!(
            "{}\n\
             1,0.5,0.5,0.5,1,0,0,0,-10.5,-2.0,0.1,0.2,0.3,4,0.8\n\
             1,1.5,0.5,0.5,,,,,-9.0,0,0,0,0,3,\n\
             4,0.5,1.5,0.5,0,0,0,2,-8.0,-1.0,0,0,0,5,0.5\n",
            HEADER
        );
        let trajectory = read_solvents(table.as_bytes()).unwrap();

        assert_eq!(trajectory.frame_ids, vec![1, 4]);
        assert_eq!(trajectory.frames[0].solvents.len(), 2);
        assert_eq!(trajectory.frames[1].solvents.len(), 1);

        let first = &trajectory.frames[0].solvents[0];
        assert_eq!(first.position, Point3::new(0.5, 0.5, 0.5));
        assert_eq!(first.solvent_solvent_energy, -10.5);
        assert_eq!(first.solute_solvent_energy, -2.0);
        assert_eq!(first.dipole, Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(first.order, Some(0.8));
        assert!(first.orientation.is_rotatable());

        let second = &trajectory.frames[0].solvents[1];
        assert_eq!(second.orientation, Orientation::Rotationless);
        assert_eq!(second.order, None);

        let normalized = trajectory.frames[1].solvents[0].orientation.quaternion().unwrap();
        assert!((normalized.k - 1.0).abs() < 1e-12);
    }

    #[test]
    fn order_column_may_be_omitted() {
        let table = "frame,x,y,z,qw,qx,qy,qz,eww,esw,dipole_x,dipole_y,dipole_z,neighbors\n\
                     1,0,0,0,1,0,0,0,0,0,0,0,0,0\n";
        let trajectory = read_solvents(table.as_bytes()).unwrap();
        assert_eq!(trajectory.frames[0].solvents[0].order, None);
    }

    #[test]
    fn decreasing_frames_are_rejected() {
        let table = format!(
            "{}\n2,0,0,0,,,,,0,0,0,0,0,0,\n1,0,0,0,,,,,0,0,0,0,0,0,\n",
            HEADER
        );
        let err = read_solvents(table.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("frame 1 appears after frame 2"));
    }

    #[test]
    fn partial_or_zero_quaternions_are_rejected() {
        for quaternion in ["1,0,,0", "0,0,0,0"] {
            let table = format!("{}\n1,0,0,0,{},0,0,0,0,0,0,\n", HEADER, quaternion);
            assert!(read_solvents(table.as_bytes()).is_err(), "{}", quaternion);
        }
    }

    #[test]
    fn atoms_are_attached_by_frame_and_species() {
        let table = format!(
            "{}\n1,0,0,0,,,,,0,0,0,0,0,0,\n2,0,0,0,,,,,0,0,0,0,0,0,\n",
            HEADER
        );
        let mut trajectory = read_solvents(table.as_bytes()).unwrap();
        let atoms = "frame,species,x,y,z\n2,H,1.0,2.0,3.0\n1,O,0.0,0.0,0.0\n2,O,0.5,0.5,0.5\n";
        let count = read_atoms(atoms.as_bytes(), &species(), &mut trajectory).unwrap();

        assert_eq!(count, 3);
        assert_eq!(trajectory.frames[0].atoms.len(), 1);
        assert_eq!(trajectory.frames[1].atoms.len(), 2);
        assert_eq!(trajectory.frames[1].atoms[0].species, 1);
        assert_eq!(trajectory.frames[1].atoms[0].position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn atoms_with_unknown_species_or_frame_are_rejected() {
        let table = format!("{}\n1,0,0,0,,,,,0,0,0,0,0,0,\n", HEADER);
        let mut trajectory = read_solvents(table.as_bytes()).unwrap();

        let unknown_species = "frame,species,x,y,z\n1,C,0,0,0\n";
        assert!(read_atoms(unknown_species.as_bytes(), &species(), &mut trajectory).is_err());

        let unknown_frame = "frame,species,x,y,z\n9,O,0,0,0\n";
        assert!(read_atoms(unknown_frame.as_bytes(), &species(), &mut trajectory).is_err());
    }

    #[test]
    fn load_trajectory_reports_the_failing_path() {
        let dir = tempfile::tempdir().unwrap();
        let solvents = dir.path().join("solvents.csv");
        fs::write(&solvents, format!("{}\n1,0,0,0,,,,,0,0,0,0,0,0,\n", HEADER)).unwrap();
        let atoms = dir.path().join("atoms.csv");
        fs::write(&atoms, "frame,species,x,y,z\n1,Xe,0,0,0\n").unwrap();

        match load_trajectory(&solvents, Some(&atoms), &species()) {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, atoms),
            other => panic!("expected a parsing error, got {:?}", other),
        }

        let trajectory = load_trajectory(&solvents, None, &[]).unwrap();
        assert_eq!(trajectory.frames.len(), 1);
    }

    #[test]
    fn atoms_without_configured_species_are_an_argument_error() {
        let dir = tempfile::tempdir().unwrap();
        let solvents = dir.path().join("solvents.csv");
        fs::write(&solvents, format!("{}\n1,0,0,0,,,,,0,0,0,0,0,0,\n", HEADER)).unwrap();
        let result = load_trajectory(&solvents, Some(&solvents), &[]);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
