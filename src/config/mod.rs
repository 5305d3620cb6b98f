pub mod engine;

pub use engine::{AnnotationConfig, EngineConfig};
