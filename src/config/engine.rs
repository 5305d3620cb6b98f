use crate::constants::{DEFAULT_SAMPLES, EARTH_RADIUS_KM, MIN_SAMPLES, MU_EARTH};
use crate::physics::geometry_errors::{GeometryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Presentation offsets (km) for the angle markers and labels.
///
/// None of these affect the orbit itself; a renderer with a different plot
/// scale overrides them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    pub angle_wedge_inner: f64,
    pub angle_wedge_outer: f64,
    pub anomaly_wedge_inner: f64,
    pub anomaly_wedge_outer: f64,
    pub angle_label_radius: f64,
    pub anomaly_label_radius: f64,
    pub node_label_offset: f64,
}

impl AnnotationConfig {
    pub const ANGLE_WEDGE_INNER: f64 = 8000.0;
    pub const ANGLE_WEDGE_OUTER: f64 = 10000.0;
    pub const ANOMALY_WEDGE_INNER: f64 = 10000.0;
    pub const ANOMALY_WEDGE_OUTER: f64 = 12000.0;
    pub const ANGLE_LABEL_RADIUS: f64 = 15000.0;
    pub const ANOMALY_LABEL_RADIUS: f64 = 17000.0;
    pub const NODE_LABEL_OFFSET: f64 = 1000.0;
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            angle_wedge_inner: Self::ANGLE_WEDGE_INNER,
            angle_wedge_outer: Self::ANGLE_WEDGE_OUTER,
            anomaly_wedge_inner: Self::ANOMALY_WEDGE_INNER,
            anomaly_wedge_outer: Self::ANOMALY_WEDGE_OUTER,
            angle_label_radius: Self::ANGLE_LABEL_RADIUS,
            anomaly_label_radius: Self::ANOMALY_LABEL_RADIUS,
            node_label_offset: Self::NODE_LABEL_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub samples: usize,
    /// Gravitational parameter (m³/s²)
    pub mu: f64,
    /// Reference radius for altitudes (km)
    pub earth_radius_km: f64,
    pub annotation: AnnotationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            mu: MU_EARTH,
            earth_radius_km: EARTH_RADIUS_KM,
            annotation: AnnotationConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Parses a JSON config; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.samples < MIN_SAMPLES {
            return Err(GeometryError::NumericDegeneracy(format!(
                "sample count {} is below the minimum of {}",
                self.samples, MIN_SAMPLES
            )));
        }
        if !(self.mu.is_finite() && self.mu > 0.0) {
            return Err(GeometryError::Config(format!(
                "gravitational parameter must be positive, got {}",
                self.mu
            )));
        }
        if !(self.earth_radius_km.is_finite() && self.earth_radius_km >= 0.0) {
            return Err(GeometryError::Config(format!(
                "earth radius must be non-negative, got {}",
                self.earth_radius_km
            )));
        }
        let a = &self.annotation;
        let radii = [
            a.angle_wedge_inner,
            a.angle_wedge_outer,
            a.anomaly_wedge_inner,
            a.anomaly_wedge_outer,
            a.angle_label_radius,
            a.anomaly_label_radius,
            a.node_label_offset,
        ];
        if radii.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(GeometryError::Config(
                "annotation radii must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults_match_explorer() {
        let config = EngineConfig::default();
        assert_eq!(config.samples, 180);
        assert_eq!(config.earth_radius_km, 6378.0);
        assert_eq!(config.annotation.angle_label_radius, 15000.0);
        assert_eq!(config.annotation.anomaly_label_radius, 17000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            EngineConfig::from_json_str(r#"{ "samples": 360, "annotation": { "angle_label_radius": 20000.0 } }"#)
                .unwrap();
        assert_eq!(config.samples, 360);
        assert_eq!(config.mu, MU_EARTH);
        assert_eq!(config.annotation.angle_label_radius, 20000.0);
        assert_eq!(config.annotation.anomaly_label_radius, 17000.0);
    }

    #[test_case(r#"{ "samples": 1 }"#; "too few samples")]
    #[test_case(r#"{ "mu": -1.0 }"#; "negative mu")]
    #[test_case(r#"{ "earth_radius_km": -6378.0 }"#; "negative earth radius")]
    #[test_case(r#"{ "annotation": { "angle_wedge_inner": -5.0 } }"#; "negative radius")]
    #[test_case(r#"{ "samples": "many" }"#; "malformed json")]
    fn rejects_bad_config(json: &str) {
        assert!(EngineConfig::from_json_str(json).is_err());
    }
}
