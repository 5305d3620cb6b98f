use approx::assert_abs_diff_eq;
use nalgebra as na;
use orbital_parameters::constants::{PI, TWO_PI};
use orbital_parameters::output::export::{GEOMETRY_FILE, SAMPLES_FILE};
use orbital_parameters::output::export_to_dir;
use orbital_parameters::{
    compute_geometry, ColumnStore, ElementInputs, EngineConfig, GeometryError, OrbitGeometry,
    OrbitGeometryEngine, OrbitSession, OrbitalElements, OutputGroup, ViewPlane,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use test_case::test_case;

fn random_elements(rng: &mut StdRng) -> OrbitalElements {
    OrbitalElements::new(
        rng.gen_range(100.0..50_000.0),
        rng.gen_range(0.0..0.99),
        rng.gen_range(0.0..PI),
        rng.gen_range(0.0..TWO_PI),
        rng.gen_range(0.0..TWO_PI),
        rng.gen_range(0.0..TWO_PI),
    )
}

fn compute(elements: &OrbitalElements, samples: usize) -> OrbitGeometry {
    compute_geometry(elements, &EngineConfig::default().with_samples(samples)).unwrap()
}

#[test]
fn reference_scenario_from_degrees() {
    let inputs = ElementInputs {
        sma_km: 7000.0,
        eccentricity: 0.1,
        inclination_deg: 45.0,
        aop_deg: 30.0,
        raan_deg: 60.0,
        anomaly_deg: 90.0,
    };
    let geometry = compute(&inputs.to_elements(), 360);

    assert_abs_diff_eq!(
        geometry.satellite.shape,
        na::Vector2::new(-3465.0, 6001.556048),
        epsilon = 1e-5
    );
    assert_abs_diff_eq!(
        geometry.satellite.inertial,
        na::Vector3::new(-5407.687495, -878.907534, 4243.740979),
        epsilon = 1e-5
    );
    assert_abs_diff_eq!(geometry.scalars.period_hours, 1.6190, epsilon = 1e-3);
}

#[test]
fn random_orbits_hold_geometric_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let elements = random_elements(&mut rng);
        let geometry = compute(&elements, 181);
        let samples = &geometry.samples;

        // closed loop
        assert_abs_diff_eq!(samples.points[0].inertial, samples.points[180].inertial, epsilon = 1e-6);

        // every sample stays between periapsis and apoapsis
        let rp = elements.periapsis_radius();
        let ra = elements.apoapsis_radius();
        for (_, point) in samples.iter() {
            let r = point.inertial.norm();
            assert!(r.is_finite());
            assert!(r >= rp * (1.0 - 1e-9) && r <= ra * (1.0 + 1e-9));
        }

        // apsides agree with the samples at v = 0 and v = π
        assert_abs_diff_eq!(geometry.apsides.periapsis.shape, samples.points[0].shape, epsilon = 1e-6);
        assert_abs_diff_eq!(geometry.apsides.apoapsis.shape, samples.points[90].shape, epsilon = 1e-6);

        assert_eq!(geometry.nodes.ascending.inertial.z, 0.0);
        assert_eq!(geometry.nodes.descending.inertial.z, 0.0);
    }
}

#[test_case(0.0; "prograde")]
#[test_case(180.0; "retrograde")]
fn equatorial_orbit_is_rotated_shape(inclination_deg: f64) {
    let raan = 75.0_f64.to_radians();
    let elements = OrbitalElements::new(15000.0, 0.5, inclination_deg.to_radians(), 1.0, raan, 0.0);
    let geometry = compute(&elements, 72);
    let flip = inclination_deg.to_radians().cos();
    for point in &geometry.samples.points {
        let tilted = na::Vector2::new(point.shape.x, point.shape.y * flip);
        let expected = na::Rotation2::new(raan) * tilted;
        assert_abs_diff_eq!(point.inertial.xy(), expected, epsilon = 1e-8);
        assert_abs_diff_eq!(point.inertial.z, 0.0, epsilon = 1e-8);
    }
}

#[test]
fn circular_orbit_has_constant_radius() {
    let elements = OrbitalElements::new(6778.0, 0.0, 0.9, 0.3, 2.0, 1.0);
    let geometry = compute(&elements, 180);
    for point in &geometry.samples.points {
        assert_abs_diff_eq!(point.inertial.norm(), 6778.0, epsilon = 1e-8);
    }
    assert_abs_diff_eq!(geometry.scalars.period_hours, 1.547, epsilon = 1e-2);
    assert_abs_diff_eq!(geometry.scalars.apogee_altitude_km, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.scalars.perigee_altitude_km, 400.0, epsilon = 1e-9);
}

#[test]
fn invalid_inputs_are_rejected_before_any_output() {
    let engine = OrbitGeometryEngine::default();
    for (a, e) in [(7000.0, 1.0), (7000.0, 2.0), (0.0, 0.5), (-1.0, 0.5)] {
        let elements = OrbitalElements::new(a, e, 0.0, 0.0, 0.0, 0.0);
        let err = engine.compute(&elements).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidElements(_)), "{}", err);
        assert!(err.is_validation());
    }

    let elements = OrbitalElements::new(7000.0, 0.1, 0.0, 0.0, 0.0, 0.0);
    let config = EngineConfig::default().with_samples(1);
    assert!(matches!(
        compute_geometry(&elements, &config),
        Err(GeometryError::NumericDegeneracy(_))
    ));

    for (a, e) in [(1e300, 0.5), (1.5e308, 0.9)] {
        let elements = OrbitalElements::new(a, e, 0.4, 0.0, 0.0, 0.0);
        assert!(matches!(
            engine.compute(&elements),
            Err(GeometryError::NumericDegeneracy(_))
        ));
    }
}

#[test]
fn session_publishes_only_valid_updates() {
    let mut session = OrbitSession::new(OrbitGeometryEngine::default());
    let mut store = ColumnStore::default();

    session
        .update_and_publish(ElementInputs::default(), &mut store)
        .unwrap();
    assert_eq!(store.notifications.len(), OutputGroup::ALL.len());
    let shape_x = store.column(OutputGroup::OrbitShape, "x").unwrap().to_vec();

    let bad = ElementInputs {
        eccentricity: 1.0,
        ..ElementInputs::default()
    };
    assert!(session.update_and_publish(bad, &mut store).is_err());
    assert_eq!(store.notifications.len(), OutputGroup::ALL.len());
    assert_eq!(store.column(OutputGroup::OrbitShape, "x").unwrap(), shape_x.as_slice());
    assert!(session.current().is_some());
}

#[test]
fn default_explorer_orbit_is_split_in_every_3d_view() {
    let inputs = ElementInputs {
        inclination_deg: 30.0,
        aop_deg: 45.0,
        raan_deg: 20.0,
        ..ElementInputs::default()
    };
    let geometry = compute(&inputs.to_elements(), 180);
    for view in [ViewPlane::NorthPole, ViewPlane::VernalAxis, ViewPlane::ZX] {
        let mask = geometry.samples.front_mask(view);
        assert_eq!(mask.len(), 180);
        assert!(mask.iter().any(|f| *f) && mask.iter().any(|f| !*f), "{}", view);
    }
}

#[test]
fn config_file_drives_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, r#"{ "samples": 24, "earth_radius_km": 6371.0 }"#).unwrap();

    let config = EngineConfig::from_json_file(&path).unwrap();
    let engine = OrbitGeometryEngine::new(config).unwrap();
    let elements = OrbitalElements::new(7000.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let geometry = engine.compute(&elements).unwrap();
    assert_eq!(geometry.samples.len(), 24);
    assert_abs_diff_eq!(geometry.scalars.perigee_altitude_km, 629.0, epsilon = 1e-9);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = EngineConfig::from_json_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(GeometryError::Io(_))));
}

#[test]
fn export_writes_csv_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output");
    let elements = OrbitalElements::new(42164.0, 0.7, 0.2, 0.4, 0.6, 0.8);
    let geometry = compute(&elements, 180);

    let (csv_path, json_path) = export_to_dir(&output, &geometry).unwrap();
    assert_eq!(csv_path, output.join(SAMPLES_FILE));
    assert_eq!(json_path, output.join(GEOMETRY_FILE));

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    assert_eq!(reader.headers().unwrap().len(), 7);
    assert_eq!(reader.records().count(), 180);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["samples"]["points"].as_array().unwrap().len(), 180);
    assert!(json["scalars"]["period_hours"].as_f64().unwrap() > 23.0);
}
