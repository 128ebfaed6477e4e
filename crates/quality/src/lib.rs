//! Pollutant classification: EPA breakpoint interpolation for the 0–500 AQI
//! scale and configuration-driven category buckets for PM2.5 and CO2.

pub mod aqi;
pub mod buckets;

pub use aqi::*;
pub use buckets::*;
