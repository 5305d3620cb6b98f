//! Orbit geometry for the orbital-parameters explorer.
//!
//! Given the six classical Keplerian elements, computes the sampled orbit in
//! the orbital plane and the inertial frame, the satellite position, apsides,
//! nodes, period and altitudes, and the marker geometry used to annotate the
//! plots.
//!
//! ```no_run
//! use orbital_parameters::{ElementInputs, OrbitGeometryEngine};
//!
//! let engine = OrbitGeometryEngine::default();
//! let inputs = ElementInputs {
//!     sma_km: 7000.0,
//!     eccentricity: 0.1,
//!     inclination_deg: 45.0,
//!     aop_deg: 30.0,
//!     raan_deg: 60.0,
//!     anomaly_deg: 90.0,
//! };
//! let geometry = engine.compute(&inputs.to_elements()).unwrap();
//! println!("{}", orbital_parameters::OrbitSummary::from(&geometry.scalars));
//! ```

pub mod config;
pub mod constants;
pub mod engine;
pub mod models;
pub mod output;
pub mod physics;

pub use config::{AnnotationConfig, EngineConfig};
pub use engine::{
    compute_geometry, publish, ColumnStore, GeometrySink, OrbitGeometryEngine, OrbitSession,
    OutputGroup, SampleBuffers,
};
pub use models::{ElementInputs, OrbitGeometry, OrbitPoint, OrbitalElements, SampledOrbit};
pub use output::OrbitSummary;
pub use physics::geometry_errors::{GeometryError, Result};
pub use physics::projection::{earth_outline, EarthOutline, ViewPlane};
