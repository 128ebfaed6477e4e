//! Static color tables, mirroring the chart color definitions in the
//! application stylesheet.

use foundation::CategoryKey;
use quality::AqiLevel;

/// Background hex color for a category in the normal (light) theme.
pub const fn chart_color(key: CategoryKey) -> &'static str {
    match key {
        CategoryKey::Green => "#1de208",
        CategoryKey::Yellow => "#e2e020",
        CategoryKey::Orange => "#e26a05",
        CategoryKey::Red => "#e20410",
        CategoryKey::Purple => "#7f01e2",
        CategoryKey::Brown => "#903305",
        CategoryKey::Blue => "#1b75bc",
        CategoryKey::Gray => "#778899",
        CategoryKey::LightGray => "#d5d5d5",
        CategoryKey::Default => "#d5d5d5",
    }
}

/// Background hex color for a category in the dark theme. Same hues,
/// darkened for contrast against light text.
pub const fn chart_color_dark(key: CategoryKey) -> &'static str {
    match key {
        CategoryKey::Green => "#2b9b20",
        CategoryKey::Yellow => "#c7ac1d",
        CategoryKey::Orange => "#b94f04",
        CategoryKey::Red => "#881218",
        CategoryKey::Purple => "#521681",
        CategoryKey::Brown => "#903305",
        CategoryKey::Blue => "#02579a",
        CategoryKey::Gray => "#7c7c7c",
        CategoryKey::LightGray => "#989696",
        CategoryKey::Default => "#989696",
    }
}

/// Theme-aware background lookup.
pub const fn background(key: CategoryKey, dark: bool) -> &'static str {
    if dark {
        chart_color_dark(key)
    } else {
        chart_color(key)
    }
}

/// Standard AirNow colors for the six AQI levels.
pub const fn aqi_level_color(level: AqiLevel) -> &'static str {
    match level {
        AqiLevel::Good => "#00e400",
        AqiLevel::Moderate => "#ffff00",
        AqiLevel::UnhealthySensitive => "#ff7e00",
        AqiLevel::Unhealthy => "#ff0000",
        AqiLevel::VeryUnhealthy => "#8f3f97",
        AqiLevel::Hazardous => "#7e0023",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation::CategoryKey;

    const ALL_KEYS: [CategoryKey; 10] = [
        CategoryKey::Green,
        CategoryKey::Yellow,
        CategoryKey::Orange,
        CategoryKey::Red,
        CategoryKey::Purple,
        CategoryKey::Brown,
        CategoryKey::Blue,
        CategoryKey::Gray,
        CategoryKey::LightGray,
        CategoryKey::Default,
    ];

    #[test]
    fn every_key_has_a_color_in_both_themes() {
        for key in ALL_KEYS {
            for dark in [false, true] {
                let c = background(key, dark);
                assert!(c.starts_with('#') && c.len() == 7, "{key} / dark={dark}");
            }
        }
    }

    #[test]
    fn default_falls_back_to_light_gray() {
        assert_eq!(chart_color(CategoryKey::Default), chart_color(CategoryKey::LightGray));
        assert_eq!(
            chart_color_dark(CategoryKey::Default),
            chart_color_dark(CategoryKey::LightGray)
        );
    }
}
