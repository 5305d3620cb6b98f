pub mod annotation;
pub mod distinguished;
pub mod frame;
pub mod geometry_errors;
pub mod orbital;
pub mod projection;
pub mod sampler;
