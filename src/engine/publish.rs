use crate::models::{AnnotationGeometry, Nodes, OrbitGeometry};
use crate::output::report::OrbitSummary;
use crate::physics::geometry_errors::{GeometryError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Named output groups consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputGroup {
    OrbitShape,
    Orbit3d,
    PositionInOrbitalPlane,
    Position3d,
    ApsidesInOrbitalPlane,
    NodesInEquatorialPlane,
    OrbitalParameters,
    Description,
}

impl OutputGroup {
    pub const ALL: [OutputGroup; 8] = [
        OutputGroup::OrbitShape,
        OutputGroup::Orbit3d,
        OutputGroup::PositionInOrbitalPlane,
        OutputGroup::Position3d,
        OutputGroup::ApsidesInOrbitalPlane,
        OutputGroup::NodesInEquatorialPlane,
        OutputGroup::OrbitalParameters,
        OutputGroup::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputGroup::OrbitShape => "orbit_shape",
            OutputGroup::Orbit3d => "orbit_3d",
            OutputGroup::PositionInOrbitalPlane => "position_in_orbital_plane",
            OutputGroup::Position3d => "position_3d",
            OutputGroup::ApsidesInOrbitalPlane => "apsides_in_orbital_plane",
            OutputGroup::NodesInEquatorialPlane => "nodes_in_equatorial_plane",
            OutputGroup::OrbitalParameters => "orbital_parameters",
            OutputGroup::Description => "orbit_description",
        }
    }
}

impl fmt::Display for OutputGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub type Columns = Vec<(&'static str, Vec<f64>)>;

/// Receiver for published geometry. All groups are written before the first
/// `changed` call of a publication.
pub trait GeometrySink {
    fn write_columns(&mut self, group: OutputGroup, columns: Columns);

    fn write_labels(&mut self, _group: OutputGroup, _labels: &[&'static str]) {}

    fn write_text(&mut self, group: OutputGroup, text: String);

    fn changed(&mut self, group: OutputGroup);
}

fn group_columns(geometry: &OrbitGeometry, group: OutputGroup) -> Columns {
    match group {
        OutputGroup::OrbitShape => {
            let (x, y) = geometry.samples.shape_columns();
            vec![("x", x), ("y", y)]
        }
        OutputGroup::Orbit3d => {
            let (x, y, z) = geometry.samples.inertial_columns();
            vec![("x", x), ("y", y), ("z", z)]
        }
        OutputGroup::PositionInOrbitalPlane => {
            let s = geometry.satellite.shape;
            vec![("x", vec![s.x]), ("y", vec![s.y])]
        }
        OutputGroup::Position3d => {
            let r = geometry.satellite.inertial;
            vec![("x", vec![r.x]), ("y", vec![r.y]), ("z", vec![r.z])]
        }
        OutputGroup::ApsidesInOrbitalPlane => {
            let (p, a) = (geometry.apsides.periapsis.shape, geometry.apsides.apoapsis.shape);
            vec![("x", vec![p.x, a.x]), ("y", vec![p.y, a.y])]
        }
        OutputGroup::NodesInEquatorialPlane => {
            let (asc, desc) = (geometry.nodes.ascending.inertial, geometry.nodes.descending.inertial);
            vec![("x", vec![asc.x, desc.x]), ("y", vec![asc.y, desc.y])]
        }
        OutputGroup::OrbitalParameters => geometry
            .annotation
            .columns()
            .into_iter()
            .map(|(name, value)| (name, vec![value]))
            .collect(),
        OutputGroup::Description => Vec::new(),
    }
}

/// Writes every output group into `sink`, then raises one change
/// notification per group.
pub fn publish<S: GeometrySink + ?Sized>(geometry: &OrbitGeometry, sink: &mut S) {
    for group in OutputGroup::ALL {
        match group {
            OutputGroup::Description => {
                sink.write_text(group, OrbitSummary::from(&geometry.scalars).to_text())
            }
            OutputGroup::NodesInEquatorialPlane => {
                sink.write_columns(group, group_columns(geometry, group));
                sink.write_labels(group, &Nodes::LABELS);
            }
            OutputGroup::OrbitalParameters => {
                sink.write_columns(group, group_columns(geometry, group));
                sink.write_labels(group, &AnnotationGeometry::LABELS);
            }
            _ => sink.write_columns(group, group_columns(geometry, group)),
        }
    }
    for group in OutputGroup::ALL {
        sink.changed(group);
    }
}

/// In-memory sink keeping the latest columns of every group.
#[derive(Debug, Default, Clone)]
pub struct ColumnStore {
    pub columns: BTreeMap<OutputGroup, BTreeMap<&'static str, Vec<f64>>>,
    pub labels: BTreeMap<OutputGroup, Vec<String>>,
    pub text: BTreeMap<OutputGroup, String>,
    pub notifications: Vec<OutputGroup>,
}

impl ColumnStore {
    pub fn column(&self, group: OutputGroup, name: &str) -> Option<&[f64]> {
        self.columns
            .get(&group)
            .and_then(|c| c.get(name))
            .map(|v| v.as_slice())
    }
}

impl GeometrySink for ColumnStore {
    fn write_columns(&mut self, group: OutputGroup, columns: Columns) {
        self.columns.insert(group, columns.into_iter().collect());
    }

    fn write_labels(&mut self, group: OutputGroup, labels: &[&'static str]) {
        self.labels
            .insert(group, labels.iter().map(|l| l.to_string()).collect());
    }

    fn write_text(&mut self, group: OutputGroup, text: String) {
        self.text.insert(group, text);
    }

    fn changed(&mut self, group: OutputGroup) {
        self.notifications.push(group);
    }
}

/// Caller-owned fixed-size sample buffers, as a plotting data source keeps them.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffers {
    pub shape_x: Vec<f64>,
    pub shape_y: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl SampleBuffers {
    pub fn new(n: usize) -> Self {
        Self {
            shape_x: vec![0.0; n],
            shape_y: vec![0.0; n],
            x: vec![0.0; n],
            y: vec![0.0; n],
            z: vec![0.0; n],
        }
    }

    fn lengths(&self) -> [usize; 5] {
        [
            self.shape_x.len(),
            self.shape_y.len(),
            self.x.len(),
            self.y.len(),
            self.z.len(),
        ]
    }
}

impl OrbitGeometry {
    /// Copies the samples into `buffers`. Buffers of the wrong length are
    /// left untouched.
    pub fn fill_buffers(&self, buffers: &mut SampleBuffers) -> Result<()> {
        let n = self.samples.len();
        if buffers.lengths().iter().any(|&len| len != n) {
            return Err(GeometryError::BufferLength {
                expected: n,
                found: buffers.lengths().to_vec(),
            });
        }
        for (k, point) in self.samples.points.iter().enumerate() {
            buffers.shape_x[k] = point.shape.x;
            buffers.shape_y[k] = point.shape.y;
            buffers.x[k] = point.inertial.x;
            buffers.y[k] = point.inertial.y;
            buffers.z[k] = point.inertial.z;
        }
        Ok(())
    }
}
