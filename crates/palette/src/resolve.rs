//! Category → presentation color resolution.

use foundation::CategoryKey;
use quality::{AqiLevel, classify_co2, classify_pm25};
use serde::{Deserialize, Serialize};

use crate::tables::{aqi_level_color, background};

/// Semantic text-contrast class consumed by the UI, not a CSS detail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextClass {
    #[serde(rename = "text-dark")]
    Dark,
    #[serde(rename = "text-light")]
    Light,
}

impl TextClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextClass::Dark => "text-dark",
            TextClass::Light => "text-light",
        }
    }
}

impl std::fmt::Display for TextClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved background color plus a contrast-safe text class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub background: &'static str,
    pub text_class: TextClass,
}

/// Looks up the background for `key` and derives the text class.
///
/// The contrast rule is independent of the color tables and is recomputed
/// on every call: dark text only sits on the two light backgrounds, and
/// only in the light theme.
pub fn resolve(key: CategoryKey, dark: bool) -> Swatch {
    Swatch {
        background: background(key, dark),
        text_class: text_class_for(key, dark),
    }
}

fn text_class_for(key: CategoryKey, dark: bool) -> TextClass {
    if matches!(key, CategoryKey::Green | CategoryKey::Yellow) && !dark {
        TextClass::Dark
    } else {
        TextClass::Light
    }
}

/// Color for a PM2.5 reading (μg/m³).
pub fn pm25_swatch(value: f64, dark: bool) -> Swatch {
    resolve(classify_pm25(value), dark)
}

/// Color for a CO2 reading (ppm).
pub fn co2_swatch(value: f64, dark: bool) -> Swatch {
    resolve(classify_co2(value), dark)
}

/// Color for a value already on the 0–500 AQI scale.
///
/// Uses the six-level AirNow table, not the per-pollutant category buckets.
/// Dark text on the two light levels keeps the badge readable.
pub fn aqi_swatch(aqi: f64) -> Swatch {
    let level = AqiLevel::from_aqi(aqi);
    let text_class = match level {
        AqiLevel::Good | AqiLevel::Moderate => TextClass::Dark,
        _ => TextClass::Light,
    };
    Swatch {
        background: aqi_level_color(level),
        text_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation::CategoryKey;

    #[test]
    fn dark_text_only_on_light_backgrounds_in_light_theme() {
        assert_eq!(resolve(CategoryKey::Green, false).text_class, TextClass::Dark);
        assert_eq!(resolve(CategoryKey::Yellow, false).text_class, TextClass::Dark);
        assert_eq!(resolve(CategoryKey::Red, false).text_class, TextClass::Light);
        // Dark theme darkens green/yellow enough for light text.
        assert_eq!(resolve(CategoryKey::Green, true).text_class, TextClass::Light);
        assert_eq!(resolve(CategoryKey::Yellow, true).text_class, TextClass::Light);
    }

    #[test]
    fn pm25_swatch_matches_direct_resolution() {
        assert_eq!(pm25_swatch(5.0, false), resolve(CategoryKey::Green, false));
        assert_eq!(pm25_swatch(40.0, true), resolve(CategoryKey::Orange, true));
    }

    #[test]
    fn co2_swatch_uses_co2_buckets() {
        assert_eq!(co2_swatch(450.0, false).background, "#e2e020");
        assert_eq!(co2_swatch(5000.0, false).background, "#778899");
    }

    #[test]
    fn unmatched_value_still_renders() {
        let s = pm25_swatch(1_000_000.0, false);
        assert_eq!(s.background, "#d5d5d5");
        assert_eq!(s.text_class, TextClass::Light);
    }

    #[test]
    fn aqi_swatch_levels() {
        assert_eq!(aqi_swatch(25.0).background, "#00e400");
        assert_eq!(aqi_swatch(25.0).text_class, TextClass::Dark);
        assert_eq!(aqi_swatch(75.0).background, "#ffff00");
        assert_eq!(aqi_swatch(175.0).background, "#ff0000");
        assert_eq!(aqi_swatch(175.0).text_class, TextClass::Light);
        assert_eq!(aqi_swatch(400.0).background, "#7e0023");
    }
}
