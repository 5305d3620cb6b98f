use crate::config::EngineConfig;
use crate::models::{OrbitGeometry, OrbitalElements};
use crate::physics::annotation::annotation_geometry;
use crate::physics::distinguished::{apsides, nodes, satellite};
use crate::physics::frame::OrbitFrame;
use crate::physics::geometry_errors::Result;
use crate::physics::orbital::OrbitalMechanics;
use crate::physics::sampler::{check_sample_count, sample_orbit};
use tracing::debug;

/// Computes the full orbit geometry for a set of elements.
///
/// Stateless: every call rebuilds the per-orbit constants, so engines can be
/// shared across threads and reused for any number of element sets.
#[derive(Debug, Clone, Default)]
pub struct OrbitGeometryEngine {
    config: EngineConfig,
}

impl OrbitGeometryEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compute(&self, elements: &OrbitalElements) -> Result<OrbitGeometry> {
        compute_geometry(elements, &self.config)
    }
}

pub fn compute_geometry(elements: &OrbitalElements, config: &EngineConfig) -> Result<OrbitGeometry> {
    check_sample_count(config.samples)?;
    let frame = OrbitFrame::new(elements)?;

    debug!(
        a = elements.semi_major_axis,
        e = elements.eccentricity,
        i = elements.inclination,
        omega = elements.arg_periapsis,
        raan = elements.raan,
        nu = elements.true_anomaly,
        samples = config.samples,
        "computing orbit geometry"
    );

    let samples = sample_orbit(&frame, config.samples)?;
    let apsides = apsides(&frame);
    let nodes = nodes(&frame);
    let satellite = satellite(&frame, elements.true_anomaly);
    let scalars = OrbitalMechanics::derived_scalars(elements, config.mu, config.earth_radius_km);
    let annotation = annotation_geometry(elements, &frame, &apsides, &nodes, &config.annotation);

    Ok(OrbitGeometry {
        elements: *elements,
        samples,
        satellite,
        apsides,
        nodes,
        scalars,
        annotation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::geometry_errors::GeometryError;
    use approx::assert_abs_diff_eq;
    use nalgebra as na;

    #[test]
    fn engine_rejects_bad_config() {
        let config = EngineConfig::default().with_samples(1);
        assert!(matches!(
            OrbitGeometryEngine::new(config),
            Err(GeometryError::NumericDegeneracy(_))
        ));
    }

    #[test]
    fn compute_rejects_invalid_elements() {
        let engine = OrbitGeometryEngine::default();
        let elements = OrbitalElements::new(-1.0, 0.1, 0.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            engine.compute(&elements),
            Err(GeometryError::InvalidElements(_))
        ));
    }

    #[test]
    fn reference_scenario() {
        let engine = OrbitGeometryEngine::new(EngineConfig::default().with_samples(360)).unwrap();
        let elements = OrbitalElements::new(
            7000.0,
            0.1,
            45.0_f64.to_radians(),
            30.0_f64.to_radians(),
            60.0_f64.to_radians(),
            90.0_f64.to_radians(),
        );
        let geometry = engine.compute(&elements).unwrap();
        assert_eq!(geometry.samples.len(), 360);
        assert_abs_diff_eq!(
            geometry.satellite.inertial,
            na::Vector3::new(-5407.687495, -878.907534, 4243.740979),
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(geometry.scalars.apogee_altitude_km, 1322.0, epsilon = 1e-9);
        assert_abs_diff_eq!(geometry.scalars.perigee_altitude_km, -78.0, epsilon = 1e-9);
    }

    #[test]
    fn outputs_are_independent_of_sample_count() {
        let elements = OrbitalElements::new(30000.0, 0.4, 1.0, 2.0, 3.0, 4.0);
        let coarse = compute_geometry(&elements, &EngineConfig::default().with_samples(3)).unwrap();
        let fine = compute_geometry(&elements, &EngineConfig::default().with_samples(720)).unwrap();
        assert_eq!(coarse.satellite, fine.satellite);
        assert_eq!(coarse.apsides, fine.apsides);
        assert_eq!(coarse.nodes, fine.nodes);
        assert_eq!(coarse.scalars, fine.scalars);
        assert_eq!(coarse.annotation, fine.annotation);
    }
}
