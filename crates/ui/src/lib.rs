//! View-side state: dialog bookkeeping and the general map configuration.
//!
//! Both stores are explicit objects constructed once at application start
//! and passed to the components that need them; there is no process-wide
//! singleton.

pub mod config;
pub mod dialog;

pub use config::*;
pub use dialog::*;
