pub mod category;
pub mod geo;
pub mod measure;

// Shared primitives only; classification and conversion live upstream.
pub use category::*;
pub use geo::*;
pub use measure::*;
