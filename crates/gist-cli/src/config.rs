use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use gistpp::core::constants::{DEFAULT_REFERENCE_DENSITY, DEFAULT_TEMPERATURE};
use gistpp::engine::config::{self as core_config, GistConfigBuilder};
use nalgebra::Point3;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Values used when neither the config file nor the command line provides one.
pub struct DefaultsConfig {
    pub temperature: f64,
    pub reference_density: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            reference_density: DEFAULT_REFERENCE_DENSITY,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialGridConfig {
    origin: Option<[f64; 3]>,
    center: Option<[f64; 3]>,
    dimensions: Option<[usize; 3]>,
    spacing: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialThermodynamicsConfig {
    temperature: Option<f64>,
    reference_density: Option<f64>,
}

/// The run configuration as written in the TOML file; every section is optional until
/// merged with command line overrides.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialGistConfig {
    grid: Option<PartialGridConfig>,
    thermodynamics: Option<PartialThermodynamicsConfig>,
    #[serde(default)]
    solvent_species: Vec<core_config::SolventSpecies>,
}

impl PartialGistConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|source| CliError::FileParsing {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolves every value as command line, then `--set`, then file, then default.
    pub fn merge_with_cli(mut self, args: &AnalyzeArgs) -> Result<core_config::GistConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let grid = self.grid.take().ok_or_else(|| {
            CliError::Config("`grid` section is required.".to_string())
        })?;
        let thermo = self.thermodynamics.take().unwrap_or_default();

        let mut builder = GistConfigBuilder::new()
            .temperature(
                args.temperature
                    .or(thermo.temperature)
                    .unwrap_or(defaults.temperature),
            )
            .reference_density(
                args.reference_density
                    .or(thermo.reference_density)
                    .unwrap_or(defaults.reference_density),
            );

        if let Some(dimensions) = grid.dimensions {
            builder = builder.dimensions(dimensions);
        }
        if let Some(spacing) = grid.spacing {
            builder = builder.spacing(spacing);
        }
        builder = match (grid.origin, grid.center) {
            (Some(_), Some(_)) => {
                return Err(CliError::Config(
                    "`grid.origin` and `grid.center` are mutually exclusive.".to_string(),
                ));
            }
            (Some([x, y, z]), None) => builder.origin(Point3::new(x, y, z)),
            (None, Some([x, y, z])) => builder.center(Point3::new(x, y, z)),
            (None, None) => builder,
        };
        for species in self.solvent_species {
            builder = builder.solvent_species(species);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;
            let float = || -> Result<f64> {
                value_str.trim().parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })
            };

            match key.trim() {
                "grid.spacing" => {
                    self.grid.get_or_insert_with(Default::default).spacing = Some(float()?);
                }
                "thermodynamics.temperature" => {
                    self.thermodynamics
                        .get_or_insert_with(Default::default)
                        .temperature = Some(float()?);
                }
                "thermodynamics.reference-density" => {
                    self.thermodynamics
                        .get_or_insert_with(Default::default)
                        .reference_density = Some(float()?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;

    const MINIMAL: &str = r#"
        [grid]
        origin = [0.0, 0.0, 0.0]
        dimensions = [10, 10, 10]
        spacing = 0.5
    "#;

    fn analyze_args(extra: &[&str]) -> AnalyzeArgs {
        let mut argv = vec!["gist", "analyze", "-c", "run.toml", "-i", "in.csv", "-o", "out.dat"];
        argv.extend_from_slice(extra);
        let Commands::Analyze(args) = Cli::parse_from(argv).command;
        args
    }

    #[test]
    fn file_values_are_merged_with_defaults() {
        let config = PartialGistConfig::from_toml(MINIMAL)
            .unwrap()
            .merge_with_cli(&analyze_args(&[]))
            .unwrap();
        assert_eq!(config.grid.dimensions, [10, 10, 10]);
        assert_eq!(config.grid.spacing, 0.5);
        assert_eq!(config.temperature, 300.0);
        assert_eq!(config.reference_density, 0.0329);
        assert!(config.solvent_species.is_empty());
    }

    #[test]
    fn full_file_with_species_and_center() {
        let content = r#"
            [grid]
            center = [5.0, 5.0, 5.0]
            dimensions = [10, 20, 10]
            spacing = 1.0

            [thermodynamics]
            temperature = 310.0
            reference-density = 0.0334

            [[solvent-species]]
            name = "O"
            atoms-per-molecule = 1

            [[solvent-species]]
            name = "H"
            atoms-per-molecule = 2
        "#;
        let config = PartialGistConfig::from_toml(content)
            .unwrap()
            .merge_with_cli(&analyze_args(&[]))
            .unwrap();
        assert_eq!(config.grid.origin, Point3::new(0.0, -5.0, 0.0));
        assert_eq!(config.temperature, 310.0);
        assert_eq!(config.reference_density, 0.0334);
        assert_eq!(config.solvent_species.len(), 2);
        assert_eq!(config.solvent_species[1].name, "H");
        assert_eq!(config.solvent_species[1].atoms_per_molecule, 2);
    }

    #[test]
    fn cli_arguments_override_set_values_and_file() {
        let content = format!("{}\n[thermodynamics]\ntemperature = 310.0\n", MINIMAL);
        let args = analyze_args(&[
            "-T",
            "298.0",
            "-S",
            "thermodynamics.temperature=350",
            "-S",
            "grid.spacing=0.25",
        ]);
        let config = PartialGistConfig::from_toml(&content)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();
        assert_eq!(config.temperature, 298.0);
        assert_eq!(config.grid.spacing, 0.25);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let content = format!("{}\nbogus = 1\n", MINIMAL);
        assert!(PartialGistConfig::from_toml(&content).is_err());
    }

    #[test]
    fn missing_grid_section_is_a_config_error() {
        let result = PartialGistConfig::default().merge_with_cli(&analyze_args(&[]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_values_are_reported_by_the_core_builder() {
        let args = analyze_args(&["--reference-density", "0"]);
        let err = PartialGistConfig::from_toml(MINIMAL)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap_err();
        assert!(err.to_string().contains("reference_density"));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["grid.spacing", "grid.spacing=abc", "grid.origin=1"] {
            let result = PartialGistConfig::from_toml(MINIMAL)
                .unwrap()
                .merge_with_cli(&analyze_args(&["-S", bad]));
            assert!(matches!(result, Err(CliError::Config(_))), "{}", bad);
        }
    }

    #[test]
    fn unreadable_file_contents_report_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[grid\n").unwrap();
        match PartialGistConfig::from_file(&path) {
            Err(CliError::FileParsing { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a parsing error, got {:?}", other),
        }
    }
}
