pub mod export;
pub mod report;

pub use export::{export_to_dir, write_geometry_json, write_samples_csv};
pub use report::OrbitSummary;
