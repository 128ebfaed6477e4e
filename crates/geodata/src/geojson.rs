//! Conversion of map records into a GeoJSON-style feature collection.

use serde::{Deserialize, Serialize};

use crate::records::{MapItem, SensorType};

/// Discriminator carried through to feature properties.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Sensor,
    Cluster,
}

/// Flat property bag attached to every feature.
///
/// All keys are always present; fields that do not apply to the record's
/// variant serialize as `null`, never disappear. The map layer reads
/// properties positionally and expects a stable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureProperties {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub sensors_count: Option<u32>,
    pub value: f64,
    pub location_id: Option<u64>,
    pub location_name: Option<String>,
    pub sensor_type: Option<SensorType>,
}

/// Point geometry. Coordinate order is `[latitude, longitude]`, matching
/// what the map widget's point layer is configured to read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            geometry_type: "Point".to_string(),
            coordinates: [latitude, longitude],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub properties: FeatureProperties,
    pub geometry: PointGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<PointFeature>,
}

/// Converts records into an equal-length feature collection, preserving
/// input order (the map draws features in order, so order is z-order).
///
/// Coordinates pass through unvalidated; out-of-range positions are the
/// rendering collaborator's problem.
pub fn to_feature_collection(items: &[MapItem]) -> FeatureCollection {
    FeatureCollection {
        collection_type: "FeatureCollection".to_string(),
        features: items.iter().map(to_feature).collect(),
    }
}

fn to_feature(item: &MapItem) -> PointFeature {
    let properties = match item {
        MapItem::Sensor(s) => FeatureProperties {
            kind: ItemKind::Sensor,
            sensors_count: None,
            value: s.value,
            location_id: Some(s.location_id),
            location_name: Some(s.location_name.clone()),
            sensor_type: s.sensor_type,
        },
        MapItem::Cluster(c) => FeatureProperties {
            kind: ItemKind::Cluster,
            sensors_count: Some(c.sensors_count),
            value: c.value,
            location_id: None,
            location_name: None,
            sensor_type: None,
        },
    };

    PointFeature {
        feature_type: "Feature".to_string(),
        properties,
        geometry: PointGeometry::new(item.latitude(), item.longitude()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ClusterPoint, SensorLocation};
    use pretty_assertions::assert_eq;

    fn sample_items() -> Vec<MapItem> {
        vec![
            MapItem::Sensor(SensorLocation {
                latitude: 47.21322,
                longitude: -1.559482,
                value: 8.4,
                location_id: 7,
                location_name: "Nantes".to_string(),
                sensor_type: Some(SensorType::Reference),
            }),
            MapItem::Cluster(ClusterPoint {
                latitude: 48.85,
                longitude: 2.35,
                value: 21.0,
                sensors_count: 12,
            }),
        ]
    }

    #[test]
    fn preserves_order_and_length() {
        let fc = to_feature_collection(&sample_items());
        assert_eq!(fc.collection_type, "FeatureCollection");
        assert_eq!(fc.features.len(), 2);
        assert_eq!(fc.features[0].properties.kind, ItemKind::Sensor);
        assert_eq!(fc.features[1].properties.kind, ItemKind::Cluster);
    }

    #[test]
    fn variant_fields_are_nulled_not_omitted() {
        let fc = to_feature_collection(&sample_items());
        let json = serde_json::to_value(&fc).unwrap();

        let sensor_props = &json["features"][0]["properties"];
        assert_eq!(sensor_props["type"], "sensor");
        assert_eq!(sensor_props["sensorsCount"], serde_json::Value::Null);
        assert_eq!(sensor_props["locationId"], 7);
        assert_eq!(sensor_props["locationName"], "Nantes");
        assert_eq!(sensor_props["sensorType"], "Reference");

        let cluster_props = &json["features"][1]["properties"];
        assert_eq!(cluster_props["type"], "cluster");
        assert_eq!(cluster_props["sensorsCount"], 12);
        assert_eq!(cluster_props["locationId"], serde_json::Value::Null);
        assert_eq!(cluster_props["locationName"], serde_json::Value::Null);
        assert_eq!(cluster_props["sensorType"], serde_json::Value::Null);
    }

    #[test]
    fn coordinates_are_lat_lon_pairs() {
        let fc = to_feature_collection(&sample_items());
        let g = &fc.features[0].geometry;
        assert_eq!(g.geometry_type, "Point");
        assert_eq!(g.coordinates, [47.21322, -1.559482]);
    }

    #[test]
    fn out_of_range_coordinates_pass_through() {
        let items = vec![MapItem::Cluster(ClusterPoint {
            latitude: 400.0,
            longitude: -500.0,
            value: 0.0,
            sensors_count: 1,
        })];
        let fc = to_feature_collection(&items);
        assert_eq!(fc.features[0].geometry.coordinates, [400.0, -500.0]);
    }

    #[test]
    fn empty_input_yields_empty_collection() {
        let fc = to_feature_collection(&[]);
        assert!(fc.features.is_empty());
    }
}
