use crate::models::DerivedScalars;
use serde::Serialize;
use std::fmt;

/// Human-readable orbit summary shown next to the plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitSummary {
    pub period_hours: f64,
    pub apogee_altitude_km: f64,
    pub perigee_altitude_km: f64,
}

impl From<&DerivedScalars> for OrbitSummary {
    fn from(scalars: &DerivedScalars) -> Self {
        Self {
            period_hours: scalars.period_hours,
            apogee_altitude_km: scalars.apogee_altitude_km,
            perigee_altitude_km: scalars.perigee_altitude_km,
        }
    }
}

impl OrbitSummary {
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_html(&self) -> String {
        format!(
            "<h2>Orbital Data</h2>\n<ul>\n    <li>Orbital period: {:.3} hours</li>\n    <li>Apogee altitude: {:.0} kilometers</li>\n    <li>Perigee altitude: {:.0} kilometers</li>\n</ul>",
            self.period_hours, self.apogee_altitude_km, self.perigee_altitude_km
        )
    }
}

impl fmt::Display for OrbitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Data")?;
        writeln!(f, "  Orbital period: {:.3} hours", self.period_hours)?;
        writeln!(f, "  Apogee altitude: {:.0} kilometers", self.apogee_altitude_km)?;
        write!(f, "  Perigee altitude: {:.0} kilometers", self.perigee_altitude_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> OrbitSummary {
        OrbitSummary {
            period_hours: 1.5426266,
            apogee_altitude_km: 1322.4,
            perigee_altitude_km: -78.0,
        }
    }

    #[test]
    fn text_rounds_like_the_explorer() {
        let text = summary().to_text();
        assert!(text.contains("Orbital period: 1.543 hours"));
        assert!(text.contains("Apogee altitude: 1322 kilometers"));
        assert!(text.contains("Perigee altitude: -78 kilometers"));
    }

    #[test]
    fn html_lists_three_items() {
        let html = summary().to_html();
        assert!(html.starts_with("<h2>Orbital Data</h2>"));
        assert_eq!(html.matches("<li>").count(), 3);
    }
}
