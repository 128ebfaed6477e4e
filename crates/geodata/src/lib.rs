//! Map data records and their GeoJSON projection.
//!
//! The fetch collaborator returns pages of heterogeneous point records,
//! either individual sensor locations or server-side clusters. This crate
//! resolves that heterogeneity into a tagged union at ingestion and flattens
//! it back into the uniform point-feature shape the map layer consumes.

pub mod geojson;
pub mod records;

pub use geojson::*;
pub use records::*;
