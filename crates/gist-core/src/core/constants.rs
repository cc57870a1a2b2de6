/// Gas constant in kcal/(mol·K).
pub const GAS_CONSTANT_KCAL: f64 = 0.0019872041;

/// Euler–Mascheroni constant, the bias correction of the nearest-neighbor estimator.
pub const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

/// One Debye expressed in e·Å.
pub const DEBYE_EA: f64 = 0.20822678;

pub const DEFAULT_TEMPERATURE: f64 = 300.0;

/// Bulk water number density in molecules/Å³.
pub const DEFAULT_REFERENCE_DENSITY: f64 = 0.0329;

/// Neighbors at most this many frames apart are not treated as independent observations.
pub const CONCERNING_FRAME_DISTANCE: u64 = 3;
