use crate::core::grid::{Grid, GridError};
use nalgebra::Point3;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl From<GridError> for ConfigError {
    fn from(err: GridError) -> Self {
        ConfigError::InvalidParameter {
            name: "grid",
            reason: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub origin: Point3<f64>,
    pub dimensions: [usize; 3],
    pub spacing: f64,
}

impl GridConfig {
    /// Grid definition from its geometric center rather than its lower corner.
    pub fn centered(center: Point3<f64>, dimensions: [usize; 3], spacing: f64) -> Self {
        let half = 0.5 * spacing;
        Self {
            origin: Point3::new(
                center.x - dimensions[0] as f64 * half,
                center.y - dimensions[1] as f64 * half,
                center.z - dimensions[2] as f64 * half,
            ),
            dimensions,
            spacing,
        }
    }

    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.origin, self.dimensions, self.spacing)
    }
}

/// A solvent atom species tracked for the `g_X` density fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SolventSpecies {
    pub name: String,
    pub atoms_per_molecule: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GistConfig {
    pub grid: GridConfig,
    /// Kelvin.
    pub temperature: f64,
    /// Bulk solvent number density ρ₀ in molecules/Å³.
    pub reference_density: f64,
    pub solvent_species: Vec<SolventSpecies>,
}

#[derive(Default)]
pub struct GistConfigBuilder {
    origin: Option<Point3<f64>>,
    center: Option<Point3<f64>>,
    dimensions: Option<[usize; 3]>,
    spacing: Option<f64>,
    temperature: Option<f64>,
    reference_density: Option<f64>,
    solvent_species: Vec<SolventSpecies>,
}

impl GistConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Point3<f64>) -> Self {
        self.origin = Some(origin);
        self
    }
    /// Alternative to [`Self::origin`]; an explicit origin wins if both are given.
    pub fn center(mut self, center: Point3<f64>) -> Self {
        self.center = Some(center);
        self
    }
    pub fn dimensions(mut self, dimensions: [usize; 3]) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }
    pub fn temperature(mut self, kelvin: f64) -> Self {
        self.temperature = Some(kelvin);
        self
    }
    pub fn reference_density(mut self, rho0: f64) -> Self {
        self.reference_density = Some(rho0);
        self
    }
    pub fn solvent_species(mut self, species: SolventSpecies) -> Self {
        self.solvent_species.push(species);
        self
    }

    pub fn build(self) -> Result<GistConfig, ConfigError> {
        let dimensions = self
            .dimensions
            .ok_or(ConfigError::MissingParameter("dimensions"))?;
        let spacing = self.spacing.ok_or(ConfigError::MissingParameter("spacing"))?;
        let grid = match (self.origin, self.center) {
            (Some(origin), _) => GridConfig {
                origin,
                dimensions,
                spacing,
            },
            (None, Some(center)) => GridConfig::centered(center, dimensions, spacing),
            (None, None) => return Err(ConfigError::MissingParameter("origin")),
        };
        grid.grid()?;

        let temperature = self
            .temperature
            .ok_or(ConfigError::MissingParameter("temperature"))?;
        require_positive("temperature", temperature)?;
        let reference_density = self
            .reference_density
            .ok_or(ConfigError::MissingParameter("reference_density"))?;
        require_positive("reference_density", reference_density)?;

        for species in &self.solvent_species {
            if species.atoms_per_molecule == 0 {
                return Err(ConfigError::InvalidParameter {
                    name: "solvent_species",
                    reason: format!("species '{}' has zero atoms per molecule", species.name),
                });
            }
        }

        Ok(GistConfig {
            grid,
            temperature,
            reference_density,
            solvent_species: self.solvent_species,
        })
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must be positive and finite, got {}", value),
        })
    }
}
