use super::frame::OrbitFrame;
use super::geometry_errors::{GeometryError, Result};
use crate::constants::{MIN_SAMPLES, TWO_PI};
use crate::models::SampledOrbit;

pub fn check_sample_count(n: usize) -> Result<()> {
    if n < MIN_SAMPLES {
        return Err(GeometryError::NumericDegeneracy(format!(
            "need at least {} samples to close the orbit, got {}",
            MIN_SAMPLES, n
        )));
    }
    Ok(())
}

/// v_k = k / (n - 1) · 2π for k = 0..n, both endpoints included.
pub fn sample_anomalies(n: usize) -> Result<Vec<f64>> {
    check_sample_count(n)?;
    let last = (n - 1) as f64;
    Ok((0..n).map(|k| k as f64 / last * TWO_PI).collect())
}

pub fn sample_orbit(frame: &OrbitFrame, n: usize) -> Result<SampledOrbit> {
    let anomalies = sample_anomalies(n)?;
    let points = anomalies.iter().map(|&v| frame.evaluate(v)).collect();
    Ok(SampledOrbit { anomalies, points })
}
