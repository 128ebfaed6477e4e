//! Presentation colors for classified readings.

pub mod resolve;
pub mod tables;

pub use resolve::*;
pub use tables::*;
