//! PM2.5 concentration to US AQI conversion.
//!
//! Based on EPA's breakpoint table (AirNow technical assistance document),
//! using the 2024-revised low breakpoints: the first segment now ends at
//! 9.0 μg/m³ instead of 12.0.

use serde::{Deserialize, Serialize};

/// Top of the AQI scale; concentrations beyond the table clamp here.
pub const AQI_MAX: f64 = 500.0;

/// One segment of the piecewise-linear concentration → AQI mapping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AqiBreakpoint {
    pub conc_low: f64,
    pub conc_high: f64,
    pub aqi_low: f64,
    pub aqi_high: f64,
}

impl AqiBreakpoint {
    const fn new(conc_low: f64, conc_high: f64, aqi_low: f64, aqi_high: f64) -> Self {
        Self {
            conc_low,
            conc_high,
            aqi_low,
            aqi_high,
        }
    }
}

/// EPA breakpoint table for PM2.5 (μg/m³), ascending and non-overlapping.
pub const PM25_AQI_BREAKPOINTS: [AqiBreakpoint; 7] = [
    AqiBreakpoint::new(0.0, 9.0, 0.0, 50.0),
    AqiBreakpoint::new(9.1, 35.4, 51.0, 100.0),
    AqiBreakpoint::new(35.5, 55.4, 101.0, 150.0),
    AqiBreakpoint::new(55.5, 125.4, 151.0, 200.0),
    AqiBreakpoint::new(125.5, 225.4, 201.0, 300.0),
    AqiBreakpoint::new(225.5, 325.4, 301.0, 400.0),
    AqiBreakpoint::new(325.5, 500.4, 401.0, 500.0),
];

/// Converts a PM2.5 concentration (μg/m³) to a US AQI index on the 0–500
/// scale, rounded to one decimal place.
///
/// `None` means "no reading" and passes through. Negative concentrations
/// clamp to 0; concentrations above the top of the table clamp to
/// [`AQI_MAX`]. Never fails: the UI always needs a renderable value.
pub fn pm25_to_aqi(pm25: Option<f64>) -> Option<f64> {
    let c = pm25?;
    Some(interpolate(c))
}

fn interpolate(c: f64) -> f64 {
    let c = c.max(0.0);

    // The segment whose upper bound first reaches `c` owns it. Values
    // falling in the rounding gap between two segments (e.g. 9.05) take
    // the following segment, keeping the mapping monotonic.
    for bp in &PM25_AQI_BREAKPOINTS {
        if c <= bp.conc_high {
            // AQI = ((AQIhigh - AQIlow) / (Chigh - Clow)) * (C - Clow) + AQIlow
            let aqi = ((bp.aqi_high - bp.aqi_low) / (bp.conc_high - bp.conc_low))
                * (c - bp.conc_low)
                + bp.aqi_low;
            return round_tenth(aqi.clamp(0.0, AQI_MAX));
        }
    }

    AQI_MAX
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Named level on the 0–500 AQI scale.
///
/// This is a parallel classification pipeline keyed directly off the AQI
/// index, distinct from the per-pollutant category buckets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiLevel {
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 50.0 {
            AqiLevel::Good
        } else if aqi <= 100.0 {
            AqiLevel::Moderate
        } else if aqi <= 150.0 {
            AqiLevel::UnhealthySensitive
        } else if aqi <= 200.0 {
            AqiLevel::Unhealthy
        } else if aqi <= 300.0 {
            AqiLevel::VeryUnhealthy
        } else {
            AqiLevel::Hazardous
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AqiLevel::Good => "good",
            AqiLevel::Moderate => "moderate",
            AqiLevel::UnhealthySensitive => "unhealthy_sensitive",
            AqiLevel::Unhealthy => "unhealthy",
            AqiLevel::VeryUnhealthy => "very_unhealthy",
            AqiLevel::Hazardous => "hazardous",
        }
    }
}
