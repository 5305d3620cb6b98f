use super::elements::OrbitalElements;
use nalgebra as na;
use serde::{Deserialize, Serialize};

/// One point of the orbit in both frames.
/// * `shape`: orbital-plane coordinates, x along the ascending node [km]
/// * `inertial`: equatorial inertial coordinates, x towards the vernal equinox [km]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitPoint {
    pub shape: na::Vector2<f64>,
    pub inertial: na::Vector3<f64>,
}

impl OrbitPoint {
    pub fn new(shape: na::Vector2<f64>, inertial: na::Vector3<f64>) -> Self {
        Self { shape, inertial }
    }
}

/// Orbit sampled at equally spaced true anomalies over [0, 2π].
/// The last sample repeats the first so the curve closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledOrbit {
    pub anomalies: Vec<f64>,
    pub points: Vec<OrbitPoint>,
}

impl SampledOrbit {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &OrbitPoint)> {
        self.anomalies.iter().copied().zip(self.points.iter())
    }

    /// `orbit_shape{x, y}` columns
    pub fn shape_columns(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.shape.x, p.shape.y)).unzip()
    }

    /// `orbit_3d{x, y, z}` columns
    pub fn inertial_columns(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut x = Vec::with_capacity(self.len());
        let mut y = Vec::with_capacity(self.len());
        let mut z = Vec::with_capacity(self.len());
        for p in &self.points {
            x.push(p.inertial.x);
            y.push(p.inertial.y);
            z.push(p.inertial.z);
        }
        (x, y, z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Apsides {
    pub periapsis: OrbitPoint,
    pub apoapsis: OrbitPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nodes {
    pub ascending: OrbitPoint,
    pub descending: OrbitPoint,
}

impl Nodes {
    pub const LABELS: [&'static str; 2] = ["asc. node", "desc. node"];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedScalars {
    pub period_hours: f64,
    pub apogee_altitude_km: f64,
    pub perigee_altitude_km: f64,
}

/// An annular wedge drawn around the focus, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// Marker geometry for the orbital-parameter overlays.
///
/// The semi-major axis segment runs from the ellipse centre to periapsis;
/// the eccentricity segment from the centre to the focus (origin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationGeometry {
    pub a_start: na::Vector2<f64>,
    pub a_end: na::Vector2<f64>,
    pub a_label: na::Vector2<f64>,
    pub e: f64,
    pub e_label: na::Vector2<f64>,
    pub i: f64,
    pub i_wedge: Wedge,
    pub i_label: na::Vector2<f64>,
    pub omega: f64,
    pub omega_wedge: Wedge,
    pub omega_label: na::Vector2<f64>,
    pub raan: f64,
    pub raan_wedge: Wedge,
    pub raan_label: na::Vector2<f64>,
    pub v_start: f64,
    pub v_end: f64,
    pub v_wedge: Wedge,
    pub v_label: na::Vector2<f64>,
    pub node_labels: [na::Vector2<f64>; 2],
}

impl AnnotationGeometry {
    pub const A_TEXT: &'static str = "a";
    pub const E_TEXT: &'static str = "e";
    pub const I_TEXT: &'static str = "i";
    pub const OMEGA_TEXT: &'static str = "ω";
    pub const RAAN_TEXT: &'static str = "Ω";
    pub const V_TEXT: &'static str = "𝜈";
    pub const LABELS: [&'static str; 6] = [
        Self::A_TEXT,
        Self::E_TEXT,
        Self::I_TEXT,
        Self::OMEGA_TEXT,
        Self::RAAN_TEXT,
        Self::V_TEXT,
    ];

    /// Flat `orbital_parameters` record as named scalar fields.
    pub fn columns(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("a_x_start", self.a_start.x),
            ("a_y_start", self.a_start.y),
            ("a_x_end", self.a_end.x),
            ("a_y_end", self.a_end.y),
            ("a_label_x", self.a_label.x),
            ("a_label_y", self.a_label.y),
            ("e", self.e),
            ("e_label_x", self.e_label.x),
            ("e_label_y", self.e_label.y),
            ("i", self.i),
            ("i_label_x", self.i_label.x),
            ("i_label_y", self.i_label.y),
            ("omega", self.omega),
            ("omega_label_x", self.omega_label.x),
            ("omega_label_y", self.omega_label.y),
            ("Gomega", self.raan),
            ("Gomega_label_x", self.raan_label.x),
            ("Gomega_label_y", self.raan_label.y),
            ("v_start", self.v_start),
            ("v_end", self.v_end),
            ("v_label_x", self.v_label.x),
            ("v_label_y", self.v_label.y),
        ]
    }
}

/// Everything the explorer draws for one set of elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitGeometry {
    pub elements: OrbitalElements,
    pub samples: SampledOrbit,
    pub satellite: OrbitPoint,
    pub apsides: Apsides,
    pub nodes: Nodes,
    pub scalars: DerivedScalars,
    pub annotation: AnnotationGeometry,
}
