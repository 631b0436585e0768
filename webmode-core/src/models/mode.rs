//! ApplicationMode entity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of web application a process should run as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationMode {
    /// Not a web application; no embedded web server is started.
    None,
    /// Servlet-based web application with an embedded servlet web server.
    Servlet,
    /// Reactive web application with an embedded reactive web server.
    Reactive,
}

impl ApplicationMode {
    /// All variants, in declaration order
    pub const ALL: [ApplicationMode; 3] = [
        ApplicationMode::None,
        ApplicationMode::Servlet,
        ApplicationMode::Reactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationMode::None => "none",
            ApplicationMode::Servlet => "servlet",
            ApplicationMode::Reactive => "reactive",
        }
    }

    /// Whether an embedded web server should be started for this mode
    pub fn is_web(&self) -> bool {
        !matches!(self, ApplicationMode::None)
    }
}

impl fmt::Display for ApplicationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known application mode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown application mode: {0} (expected none, servlet or reactive)")]
pub struct ParseApplicationModeError(pub String);

impl FromStr for ApplicationMode {
    type Err = ParseApplicationModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ApplicationMode::None),
            "servlet" => Ok(ApplicationMode::Servlet),
            "reactive" => Ok(ApplicationMode::Reactive),
            _ => Err(ParseApplicationModeError(s.to_string())),
        }
    }
}
