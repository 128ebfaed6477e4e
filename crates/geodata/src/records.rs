use serde::{Deserialize, Serialize};

/// A single sensor installation on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Current reading for the selected measure.
    pub value: f64,
    pub location_id: u64,
    pub location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor_type: Option<SensorType>,
}

/// A server-side aggregation of nearby sensors at the current zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Aggregated reading for the cluster.
    pub value: f64,
    pub sensors_count: u32,
}

/// Hardware class of a sensor, as labeled upstream.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorType {
    Reference,
    #[serde(rename = "DIY")]
    Diy,
    #[serde(rename = "Small Sensor")]
    SmallSensor,
}

/// One record of a map data page, discriminated by its `type` tag rather
/// than by probing for variant-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MapItem {
    Sensor(SensorLocation),
    Cluster(ClusterPoint),
}

impl MapItem {
    pub fn latitude(&self) -> f64 {
        match self {
            MapItem::Sensor(s) => s.latitude,
            MapItem::Cluster(c) => c.latitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        match self {
            MapItem::Sensor(s) => s.longitude,
            MapItem::Cluster(c) => c.longitude,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            MapItem::Sensor(s) => s.value,
            MapItem::Cluster(c) => c.value,
        }
    }
}

/// Paged envelope returned by the data-fetch collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPage {
    pub data: Vec<MapItem>,
    pub page: u32,
    pub pagesize: u32,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sensor_record_round_trips_wire_shape() {
        let json = r#"{
            "latitude": 47.2,
            "longitude": -1.55,
            "type": "sensor",
            "value": 12.5,
            "locationId": 42,
            "locationName": "Nantes centre",
            "sensorType": "Small Sensor"
        }"#;
        let item: MapItem = serde_json::from_str(json).unwrap();
        let MapItem::Sensor(ref sensor) = item else {
            panic!("expected sensor variant");
        };
        assert_eq!(sensor.location_id, 42);
        assert_eq!(sensor.sensor_type, Some(SensorType::SmallSensor));

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["type"], "sensor");
        assert_eq!(back["locationName"], "Nantes centre");
        assert_eq!(back["sensorType"], "Small Sensor");
    }

    #[test]
    fn cluster_record_round_trips_wire_shape() {
        let json = r#"{
            "latitude": 10.0,
            "longitude": 20.0,
            "type": "cluster",
            "value": 33.0,
            "sensorsCount": 17
        }"#;
        let item: MapItem = serde_json::from_str(json).unwrap();
        assert_eq!(
            item,
            MapItem::Cluster(ClusterPoint {
                latitude: 10.0,
                longitude: 20.0,
                value: 33.0,
                sensors_count: 17,
            })
        );
    }

    #[test]
    fn sensor_type_is_optional() {
        let json = r#"{
            "latitude": 0.0,
            "longitude": 0.0,
            "type": "sensor",
            "value": 1.0,
            "locationId": 1,
            "locationName": "x"
        }"#;
        let item: MapItem = serde_json::from_str(json).unwrap();
        let MapItem::Sensor(sensor) = item else {
            panic!("expected sensor variant");
        };
        assert_eq!(sensor.sensor_type, None);
    }

    #[test]
    fn page_envelope_parses() {
        let json = r#"{
            "data": [
                {"latitude": 1.0, "longitude": 2.0, "type": "cluster", "value": 3.0, "sensorsCount": 4}
            ],
            "page": 1,
            "pagesize": 100,
            "total": 1
        }"#;
        let page: MapPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 1);
    }
}
