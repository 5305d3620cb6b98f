use crate::models::{OrbitGeometry, SampledOrbit};
use crate::physics::geometry_errors::Result;
use csv::Writer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const SAMPLES_FILE: &str = "orbit_samples.csv";
pub const GEOMETRY_FILE: &str = "orbit_geometry.json";

pub fn write_samples_csv<W: Write>(writer: W, samples: &SampledOrbit) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record([
        "Index",
        "True Anomaly (deg)",
        "Shape X (km)",
        "Shape Y (km)",
        "Position X (km)",
        "Position Y (km)",
        "Position Z (km)",
    ])?;

    for (k, (v, point)) in samples.iter().enumerate() {
        writer.write_record(&[
            k.to_string(),
            v.to_degrees().to_string(),
            point.shape.x.to_string(),
            point.shape.y.to_string(),
            point.inertial.x.to_string(),
            point.inertial.y.to_string(),
            point.inertial.z.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_geometry_json<W: Write>(writer: W, geometry: &OrbitGeometry) -> Result<()> {
    serde_json::to_writer_pretty(writer, geometry)?;
    Ok(())
}

/// Writes the sample CSV and the geometry JSON into `output_dir`, creating it
/// if needed. Returns the two file paths.
pub fn export_to_dir<P: AsRef<Path>>(
    output_dir: P,
    geometry: &OrbitGeometry,
) -> Result<(PathBuf, PathBuf)> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let samples_path = output_dir.join(SAMPLES_FILE);
    write_samples_csv(BufWriter::new(File::create(&samples_path)?), &geometry.samples)?;
    info!("Wrote {} samples to {:?}", geometry.samples.len(), samples_path);

    let geometry_path = output_dir.join(GEOMETRY_FILE);
    let mut json = BufWriter::new(File::create(&geometry_path)?);
    write_geometry_json(&mut json, geometry)?;
    json.flush()?;
    info!("Wrote orbit geometry to {:?}", geometry_path);

    Ok((samples_path, geometry_path))
}
