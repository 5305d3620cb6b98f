use super::frame::OrbitFrame;
use crate::constants::{PI, TWO_PI};
use crate::models::{Apsides, Nodes, OrbitPoint};
use nalgebra as na;

/// Apsides from the closed-form radii a(1 - e) and a(1 + e) along the
/// periapsis direction (cos ω, sin ω), so the endpoints are exact.
pub fn apsides(frame: &OrbitFrame) -> Apsides {
    let a = frame.semi_major_axis;
    let e = frame.eccentricity;
    let direction = na::Vector2::new(frame.cos_omega, frame.sin_omega);

    let periapsis = direction * (a * (1.0 - e));
    let apoapsis = -direction * (a * (1.0 + e));

    Apsides {
        periapsis: OrbitPoint::new(periapsis, frame.to_inertial(&periapsis)),
        apoapsis: OrbitPoint::new(apoapsis, frame.to_inertial(&apoapsis)),
    }
}

/// Nodes on the line of nodes. The radius is taken at v = 2π - ω (ascending)
/// and v = π - ω (descending); only Ω rotates them, so z is exactly 0.
pub fn nodes(frame: &OrbitFrame) -> Nodes {
    let omega = frame.sin_omega.atan2(frame.cos_omega);
    let r_ascending = frame.radius(TWO_PI - omega);
    let r_descending = frame.radius(PI - omega);

    let node = |r: f64| {
        OrbitPoint::new(
            na::Vector2::new(r, 0.0),
            na::Vector3::new(r * frame.cos_raan, r * frame.sin_raan, 0.0),
        )
    };

    Nodes {
        ascending: node(r_ascending),
        descending: node(-r_descending),
    }
}

pub fn satellite(frame: &OrbitFrame, true_anomaly: f64) -> OrbitPoint {
    frame.evaluate(true_anomaly)
}
