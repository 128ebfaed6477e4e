use serde::{Deserialize, Serialize};

/// Classification bucket shared by the chart and map styling pipelines.
///
/// This is the join key between threshold classification and color
/// resolution: classifiers produce a `CategoryKey`, the palette maps it to
/// presentation colors. The set is closed and fixed at build time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Brown,
    Blue,
    Gray,
    LightGray,
    Default,
}

impl CategoryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Green => "green",
            CategoryKey::Yellow => "yellow",
            CategoryKey::Orange => "orange",
            CategoryKey::Red => "red",
            CategoryKey::Purple => "purple",
            CategoryKey::Brown => "brown",
            CategoryKey::Blue => "blue",
            CategoryKey::Gray => "gray",
            CategoryKey::LightGray => "lightgray",
            CategoryKey::Default => "default",
        }
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
