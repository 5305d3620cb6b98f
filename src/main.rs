use anyhow::Result;
use clap::Parser;
use orbital_parameters::constants::{DEFAULT_ECCENTRICITY, DEFAULT_SMA_KM};
use orbital_parameters::output::export_to_dir;
use orbital_parameters::{
    ElementInputs, EngineConfig, OrbitGeometryEngine, OrbitSession, OrbitSummary, ViewPlane,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "orbital-parameters",
    about = "Compute orbit geometry from Keplerian elements"
)]
struct Args {
    /// Semi-major axis (km)
    #[arg(long, default_value_t = DEFAULT_SMA_KM)]
    sma: f64,

    /// Eccentricity (-)
    #[arg(short, long, default_value_t = DEFAULT_ECCENTRICITY)]
    eccentricity: f64,

    /// Inclination (deg)
    #[arg(short, long, default_value_t = 0.0)]
    inclination: f64,

    /// Argument of perigee (deg)
    #[arg(long, default_value_t = 0.0)]
    aop: f64,

    /// Right ascension of ascending node (deg)
    #[arg(long, default_value_t = 0.0)]
    raan: f64,

    /// True anomaly of the satellite (deg)
    #[arg(short, long, default_value_t = 0.0)]
    anomaly: f64,

    /// Number of orbit samples, overrides the config file
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Engine config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading engine config from {:?}", path);
            EngineConfig::from_json_file(path)?
        }
        None => EngineConfig::default(),
    };
    if let Some(samples) = args.samples {
        config = config.with_samples(samples);
    }

    let mut session = OrbitSession::new(OrbitGeometryEngine::new(config)?);
    let inputs = ElementInputs {
        sma_km: args.sma,
        eccentricity: args.eccentricity,
        inclination_deg: args.inclination,
        aop_deg: args.aop,
        raan_deg: args.raan,
        anomaly_deg: args.anomaly,
    };
    let outside = inputs.outside_slider_ranges();
    if !outside.is_empty() {
        warn!("Inputs outside the explorer slider ranges: {}", outside.join(", "));
    }
    let geometry = session.update(inputs)?;

    for line in OrbitSummary::from(&geometry.scalars).to_text().lines() {
        info!("{}", line);
    }
    let sat = geometry.satellite.inertial;
    info!("Satellite position (km): [{:.3}, {:.3}, {:.3}]", sat.x, sat.y, sat.z);
    for view in ViewPlane::ALL {
        let front = geometry
            .samples
            .front_mask(view)
            .iter()
            .filter(|front| **front)
            .count();
        info!("{}: {} of {} samples in front", view, front, geometry.samples.len());
    }

    export_to_dir(&args.output, geometry)?;
    Ok(())
}
