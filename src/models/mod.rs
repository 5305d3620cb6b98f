pub mod elements;
pub mod geometry;

pub use elements::{ElementInputs, OrbitalElements};
pub use geometry::{
    AnnotationGeometry, Apsides, DerivedScalars, Nodes, OrbitGeometry, OrbitPoint, SampledOrbit,
    Wedge,
};
