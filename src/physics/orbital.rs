use crate::constants::{METERS_PER_KM, PI, SECONDS_PER_HOUR};
use crate::models::{DerivedScalars, OrbitalElements};
use nalgebra as na;

pub struct OrbitalMechanics;

impl OrbitalMechanics {
    /// Kepler's third law.
    ///   a: semi-major axis [km]
    ///   mu: gravitational parameter [m³/s²]
    /// Returns: period [s]
    pub fn compute_orbital_period(a: f64, mu: f64) -> f64 {
        let a_m = a * METERS_PER_KM;
        2.0 * PI * (a_m.powi(3) / mu).sqrt()
    }

    pub fn compute_orbital_period_hours(a: f64, mu: f64) -> f64 {
        Self::compute_orbital_period(a, mu) / SECONDS_PER_HOUR
    }

    /// Returns (apogee altitude, perigee altitude) above a sphere of `body_radius` [km]
    pub fn compute_apsis_altitudes(elements: &OrbitalElements, body_radius: f64) -> (f64, f64) {
        (
            elements.apoapsis_radius() - body_radius,
            elements.periapsis_radius() - body_radius,
        )
    }

    pub fn derived_scalars(elements: &OrbitalElements, mu: f64, body_radius: f64) -> DerivedScalars {
        let (apogee_altitude_km, perigee_altitude_km) =
            Self::compute_apsis_altitudes(elements, body_radius);
        DerivedScalars {
            period_hours: Self::compute_orbital_period_hours(elements.semi_major_axis, mu),
            apogee_altitude_km,
            perigee_altitude_km,
        }
    }

    /// Converts Keplerian elements to an inertial position by composing
    /// rotation matrices, Rz(Ω)·Rx(i)·Rz(ω), applied to the perifocal point.
    /// Returns: position [km]
    pub fn keplerian_to_position(elements: &OrbitalElements) -> na::Vector3<f64> {
        let nu = elements.true_anomaly;
        let r_mag = elements.semi_latus_rectum() / (1.0 + elements.eccentricity * nu.cos());

        // Position in perifocal frame
        let r_orbital = na::Vector3::new(r_mag * nu.cos(), r_mag * nu.sin(), 0.0);

        // Rotation matrices
        let rot_omega = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), elements.arg_periapsis);
        let rot_i = na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), elements.inclination);
        let rot_omega_cap = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), elements.raan);

        let transform = rot_omega_cap * rot_i * rot_omega;
        transform * r_orbital
    }
}
