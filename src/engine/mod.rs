pub mod geometry;
pub mod publish;
pub mod session;

pub use geometry::{compute_geometry, OrbitGeometryEngine};
pub use publish::{publish, ColumnStore, GeometrySink, OutputGroup, SampleBuffers};
pub use session::OrbitSession;
