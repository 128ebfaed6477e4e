use serde::{Deserialize, Serialize};

/// Pollutant measure selectable in the map view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Fine particulate matter, μg/m³.
    Pm25,
    /// Carbon dioxide, ppm.
    Co2,
}

impl Measure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Pm25 => "pm25",
            Measure::Co2 => "co2",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pm25" | "pm2.5" => Some(Measure::Pm25),
            "co2" | "rco2" => Some(Measure::Co2),
            _ => None,
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
