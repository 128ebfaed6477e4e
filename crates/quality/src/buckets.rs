//! Discrete category classification driven by ordered bucket tables.

use foundation::CategoryKey;

/// One entry of a discrete classification table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CategoryBucket {
    /// Evaluation priority; higher priorities are scanned first.
    pub priority: u8,
    pub key: CategoryKey,
    /// Inclusive upper bound for this bucket.
    pub upper: f64,
}

impl CategoryBucket {
    pub const fn new(priority: u8, key: CategoryKey, upper: f64) -> Self {
        Self {
            priority,
            key,
            upper,
        }
    }
}

/// PM2.5 buckets (μg/m³), aligned with the 2024 EPA category boundaries.
pub const PM25_BUCKETS: [CategoryBucket; 6] = [
    CategoryBucket::new(1, CategoryKey::Green, 9.0),
    CategoryBucket::new(2, CategoryKey::Yellow, 35.4),
    CategoryBucket::new(3, CategoryKey::Orange, 55.4),
    CategoryBucket::new(4, CategoryKey::Red, 125.4),
    CategoryBucket::new(5, CategoryKey::Purple, 225.4),
    CategoryBucket::new(6, CategoryKey::Brown, 10_000.0),
];

/// CO2 buckets (ppm). The top bucket doubles as an "implausible reading"
/// marker, hence gray rather than a warning color.
pub const CO2_BUCKETS: [CategoryBucket; 4] = [
    CategoryBucket::new(1, CategoryKey::Green, 449.0),
    CategoryBucket::new(2, CategoryKey::Yellow, 499.0),
    CategoryBucket::new(3, CategoryKey::Orange, 799.0),
    CategoryBucket::new(4, CategoryKey::Gray, 10_000.0),
];

/// Classifies `value` against a bucket table.
///
/// The table is evaluated in descending priority order and every entry is
/// visited; each entry whose `upper` still covers `value` overwrites the
/// running result, so the lowest matching bucket wins. A value above every
/// bound yields [`CategoryKey::Default`].
pub fn classify(value: f64, buckets: &[CategoryBucket]) -> CategoryKey {
    let mut ordered: Vec<CategoryBucket> = buckets.to_vec();
    ordered.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut result = CategoryKey::Default;
    for bucket in &ordered {
        if value <= bucket.upper {
            result = bucket.key;
        }
    }
    result
}

/// Category for a PM2.5 concentration in μg/m³.
pub fn classify_pm25(value: f64) -> CategoryKey {
    classify(value, &PM25_BUCKETS)
}

/// Category for a CO2 concentration in ppm.
pub fn classify_co2(value: f64) -> CategoryKey {
    classify(value, &CO2_BUCKETS)
}
