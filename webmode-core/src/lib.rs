//! # Webmode Core Library
//!
//! Decides whether a hosting application runs without a web server, with a
//! blocking servlet-style server, or with a reactive server, by probing which
//! indicator modules are present. Also collects the present indicators for a
//! reflection hints registry.

pub mod detector;
pub mod models;
pub mod oracle;
pub mod services;

pub use detector::{HintsError, ReflectionHints, WebApplicationTypeDetector};
pub use models::{ApplicationMode, IndicatorName, ModuleContext};
pub use oracle::{ModuleManifest, ModuleSet, PresenceOracle};
