//! DetectionReport entity
//!
//! Captures the outcome of one detection pass for display or JSON output.

use super::{ApplicationMode, IndicatorName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a detection pass, with the indicators that were found present
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Deduced application mode
    pub mode: ApplicationMode,
    /// Indicators present in the default context, in collection order
    pub present: Vec<IndicatorName>,
    /// Timestamp when the mode was determined
    pub determined_at: DateTime<Utc>,
}

impl DetectionReport {
    pub fn new(mode: ApplicationMode, present: Vec<IndicatorName>) -> Self {
        Self {
            mode,
            present,
            determined_at: Utc::now(),
        }
    }
}
