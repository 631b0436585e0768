//! Data models for webmode

pub mod configuration;
pub mod indicator;
pub mod mode;
pub mod report;

pub use configuration::*;
pub use indicator::*;
pub use mode::*;
pub use report::*;
