use foundation::Measure;
use serde::{Deserialize, Serialize};

/// Cross-view configuration: which pollutant the map is currently showing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub selected_measure: Measure,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            selected_measure: Measure::Pm25,
        }
    }
}

impl GeneralConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selected_measure(&mut self, measure: Measure) {
        self.selected_measure = measure;
    }
}
