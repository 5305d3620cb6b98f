use super::geometry_errors::Result;
use crate::models::{OrbitPoint, OrbitalElements};
use nalgebra as na;

/// Per-orbit constants shared by every evaluation: `p`, `e` and the
/// cosines/sines of ω, Ω and i. Built fresh from the elements on each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitFrame {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub semi_latus_rectum: f64,
    pub cos_omega: f64,
    pub sin_omega: f64,
    pub cos_raan: f64,
    pub sin_raan: f64,
    pub cos_i: f64,
    pub sin_i: f64,
}

impl OrbitFrame {
    /// Validates the elements and precomputes the trig constants.
    pub fn new(elements: &OrbitalElements) -> Result<Self> {
        elements.validate()?;
        let (sin_omega, cos_omega) = elements.arg_periapsis.sin_cos();
        let (sin_raan, cos_raan) = elements.raan.sin_cos();
        let (sin_i, cos_i) = elements.inclination.sin_cos();

        Ok(Self {
            semi_major_axis: elements.semi_major_axis,
            eccentricity: elements.eccentricity,
            semi_latus_rectum: elements.semi_latus_rectum(),
            cos_omega,
            sin_omega,
            cos_raan,
            sin_raan,
            cos_i,
            sin_i,
        })
    }

    /// Polar radius r = p / (1 + e cos v). Positive for all v since e < 1.
    pub fn radius(&self, v: f64) -> f64 {
        self.semi_latus_rectum / (1.0 + self.eccentricity * v.cos())
    }

    /// Rotates the polar point (r, v) by ω into the orbital plane.
    pub fn to_shape(&self, r: f64, v: f64) -> na::Vector2<f64> {
        let (sin_v, cos_v) = v.sin_cos();
        na::Vector2::new(
            r * self.cos_omega * cos_v - r * self.sin_omega * sin_v,
            r * self.sin_omega * cos_v + r * self.cos_omega * sin_v,
        )
    }

    /// Tilts an orbital-plane point about the line of nodes by i.
    pub fn tilt(&self, shape: &na::Vector2<f64>) -> na::Vector3<f64> {
        na::Vector3::new(shape.x, shape.y * self.cos_i, shape.y * self.sin_i)
    }

    /// Rotates about the pole by Ω.
    pub fn rotate_raan(&self, tilted: &na::Vector3<f64>) -> na::Vector3<f64> {
        na::Vector3::new(
            tilted.x * self.cos_raan - tilted.y * self.sin_raan,
            tilted.x * self.sin_raan + tilted.y * self.cos_raan,
            tilted.z,
        )
    }

    pub fn to_inertial(&self, shape: &na::Vector2<f64>) -> na::Vector3<f64> {
        self.rotate_raan(&self.tilt(shape))
    }

    /// Position at true anomaly `v` in both frames.
    pub fn evaluate(&self, v: f64) -> OrbitPoint {
        let shape = self.to_shape(self.radius(v), v);
        OrbitPoint::new(shape, self.to_inertial(&shape))
    }
}
