use crate::constants::PI;
use crate::models::{OrbitPoint, SampledOrbit};
use crate::physics::geometry_errors::Result;
use crate::physics::sampler::check_sample_count;
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four projections of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewPlane {
    /// Orbit shape: orbital-plane x horizontal, y vertical
    OrbitalPlane,
    /// Seen from the north pole: inertial y horizontal, x vertical, depth +z
    NorthPole,
    /// Seen from the vernal axis: inertial y horizontal, z vertical, depth +x
    VernalAxis,
    /// Inertial z horizontal, x vertical, depth +y
    ZX,
}

impl ViewPlane {
    pub const ALL: [ViewPlane; 4] = [
        ViewPlane::OrbitalPlane,
        ViewPlane::NorthPole,
        ViewPlane::VernalAxis,
        ViewPlane::ZX,
    ];

    /// (horizontal, vertical) plot coordinates of a point.
    pub fn project(&self, point: &OrbitPoint) -> na::Vector2<f64> {
        let r = &point.inertial;
        match self {
            ViewPlane::OrbitalPlane => point.shape,
            ViewPlane::NorthPole => na::Vector2::new(r.y, r.x),
            ViewPlane::VernalAxis => na::Vector2::new(r.y, r.z),
            ViewPlane::ZX => na::Vector2::new(r.z, r.x),
        }
    }

    /// Coordinate along the viewing axis, positive towards the viewer.
    pub fn depth(&self, point: &OrbitPoint) -> f64 {
        match self {
            ViewPlane::OrbitalPlane => 0.0,
            ViewPlane::NorthPole => point.inertial.z,
            ViewPlane::VernalAxis => point.inertial.x,
            ViewPlane::ZX => point.inertial.y,
        }
    }
}

impl fmt::Display for ViewPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewPlane::OrbitalPlane => write!(f, "orbit shape"),
            ViewPlane::NorthPole => write!(f, "orbit seen from North pole"),
            ViewPlane::VernalAxis => write!(f, "orbit seen from Vernal axis"),
            ViewPlane::ZX => write!(f, "orbit seen along y"),
        }
    }
}

impl SampledOrbit {
    pub fn project(&self, view: ViewPlane) -> Vec<na::Vector2<f64>> {
        self.points.iter().map(|p| view.project(p)).collect()
    }

    /// Per sample, whether it lies in front of the picture plane (depth > 0).
    pub fn front_mask(&self, view: ViewPlane) -> Vec<bool> {
        self.points.iter().map(|p| view.depth(p) > 0.0).collect()
    }
}

/// Upper half-disc band of the Earth drawn under every plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthOutline {
    pub x: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

pub fn earth_outline(radius: f64, n: usize) -> Result<EarthOutline> {
    check_sample_count(n)?;
    let last = (n - 1) as f64;
    let mut outline = EarthOutline {
        x: Vec::with_capacity(n),
        upper: Vec::with_capacity(n),
        lower: Vec::with_capacity(n),
    };
    for k in 0..n {
        let (sin, cos) = (k as f64 / last * PI).sin_cos();
        outline.x.push(radius * cos);
        outline.upper.push(radius * sin);
        outline.lower.push(-radius * sin);
    }
    Ok(outline)
}
