use crate::constants::{
    DEFAULT_ECCENTRICITY, DEFAULT_SMA_KM, ECCENTRICITY_MARGIN, MAX_ANGLE_DEG, MAX_INCLINATION_DEG,
    MAX_SMA_KM, METERS_PER_KM,
};
use crate::physics::geometry_errors::{GeometryError, Result};
use serde::{Deserialize, Serialize};

/// Classical Keplerian elements of an elliptical orbit.
/// Units:
/// * `semi_major_axis`: km
/// * `eccentricity`: unitless, in [0, 1)
/// * `inclination`: radians
/// * `arg_periapsis`: radians (ω)
/// * `raan`: radians (Ω)
/// * `true_anomaly`: radians, position of the satellite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub arg_periapsis: f64,
    pub raan: f64,
    pub true_anomaly: f64,
}

impl OrbitalElements {
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        arg_periapsis: f64,
        raan: f64,
        true_anomaly: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            arg_periapsis,
            raan,
            true_anomaly,
        }
    }

    /// Checks the ellipse domain: `a > 0`, `0 <= e < 1`, every value finite.
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("semi-major axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("argument of periapsis", self.arg_periapsis),
            ("right ascension of ascending node", self.raan),
            ("true anomaly", self.true_anomaly),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GeometryError::InvalidElements(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.semi_major_axis <= 0.0 {
            return Err(GeometryError::InvalidElements(format!(
                "semi-major axis must be positive, got {} km",
                self.semi_major_axis
            )));
        }

        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(GeometryError::InvalidElements(format!(
                "eccentricity must be in [0, 1), got {}",
                self.eccentricity
            )));
        }

        if 1.0 - self.eccentricity < ECCENTRICITY_MARGIN {
            return Err(GeometryError::NumericDegeneracy(format!(
                "eccentricity {} is too close to 1",
                self.eccentricity
            )));
        }

        // Apoapsis and the period's a³ must both stay representable.
        let a_m = self.semi_major_axis * METERS_PER_KM;
        if !self.apoapsis_radius().is_finite() || !(a_m * a_m * a_m).is_finite() {
            return Err(GeometryError::NumericDegeneracy(format!(
                "semi-major axis {} km overflows the orbit geometry",
                self.semi_major_axis
            )));
        }

        Ok(())
    }

    /// Semi-latus rectum p = a(1 - e²) [km]
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    pub fn periapsis_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

/// The six explorer inputs as the UI presents them: km, unitless and degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementInputs {
    pub sma_km: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub aop_deg: f64,
    pub raan_deg: f64,
    pub anomaly_deg: f64,
}

impl Default for ElementInputs {
    fn default() -> Self {
        Self {
            sma_km: DEFAULT_SMA_KM,
            eccentricity: DEFAULT_ECCENTRICITY,
            inclination_deg: 0.0,
            aop_deg: 0.0,
            raan_deg: 0.0,
            anomaly_deg: 0.0,
        }
    }
}

impl ElementInputs {
    pub fn to_elements(&self) -> OrbitalElements {
        OrbitalElements::new(
            self.sma_km,
            self.eccentricity,
            self.inclination_deg.to_radians(),
            self.aop_deg.to_radians(),
            self.raan_deg.to_radians(),
            self.anomaly_deg.to_radians(),
        )
    }
}

impl ElementInputs {
    /// Names of the inputs that lie outside the explorer's slider ranges.
    pub fn outside_slider_ranges(&self) -> Vec<&'static str> {
        let ranges = [
            ("sma_km", self.sma_km, 0.0, MAX_SMA_KM),
            ("eccentricity", self.eccentricity, 0.0, 1.0),
            ("inclination_deg", self.inclination_deg, 0.0, MAX_INCLINATION_DEG),
            ("aop_deg", self.aop_deg, 0.0, MAX_ANGLE_DEG),
            ("raan_deg", self.raan_deg, 0.0, MAX_ANGLE_DEG),
            ("anomaly_deg", self.anomaly_deg, 0.0, MAX_ANGLE_DEG),
        ];
        ranges
            .iter()
            .filter(|(_, value, min, max)| !(*min..=*max).contains(value))
            .map(|(name, ..)| *name)
            .collect()
    }
}

impl From<ElementInputs> for OrbitalElements {
    fn from(inputs: ElementInputs) -> Self {
        inputs.to_elements()
    }
}
