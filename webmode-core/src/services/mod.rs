//! Services module

pub mod logging;
