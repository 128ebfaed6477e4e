use serde::{Deserialize, Serialize};

/// Geographic position in WGS84 degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Rectangular bounds given by two corners.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLonBounds {
    pub south_west: LatLon,
    pub north_east: LatLon,
}

impl LatLonBounds {
    pub const fn new(south_west: LatLon, north_east: LatLon) -> Self {
        Self {
            south_west,
            north_east,
        }
    }
}

/// Initial camera/viewport settings handed to the map widget.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewConfig {
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub center: LatLon,
    pub max_bounds: LatLonBounds,
    /// 1.0 pins panning hard to `max_bounds`.
    pub max_bounds_viscosity: f64,
}

/// The view the map opens with: world-level zoom centered on western Europe,
/// panning constrained to slightly beyond the antimeridian.
pub const INITIAL_MAP_VIEW: MapViewConfig = MapViewConfig {
    zoom: 3,
    min_zoom: 2,
    max_zoom: 18,
    center: LatLon::new(47.21322, -1.559482),
    max_bounds: LatLonBounds::new(LatLon::new(-88.0, -230.0), LatLon::new(88.0, 230.0)),
    max_bounds_viscosity: 1.0,
};
