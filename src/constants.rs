pub const MU_EARTH: f64 = 3.986004418e14; // Earth's gravitational parameter (m³/s²)
pub const EARTH_RADIUS_KM: f64 = 6378.0; // Equatorial radius used for altitudes (km)

// Sampling
pub const DEFAULT_SAMPLES: usize = 180;
pub const MIN_SAMPLES: usize = 2;

// Eccentricities closer to 1 than this are rejected as degenerate
pub const ECCENTRICITY_MARGIN: f64 = 1e-6;

// Slider ranges of the explorer UI
pub const MAX_SMA_KM: f64 = 50_000.0;
pub const MAX_INCLINATION_DEG: f64 = 180.0;
pub const MAX_ANGLE_DEG: f64 = 360.0;

// Default explorer state (geostationary-like sma)
pub const DEFAULT_SMA_KM: f64 = 42_164.0;
pub const DEFAULT_ECCENTRICITY: f64 = 0.7;

// Math
pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = 2.0 * PI;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const METERS_PER_KM: f64 = 1000.0;
