//! Indicator names and module-loading contexts
//!
//! An indicator is a fully qualified type name whose loadability signals that
//! a particular library is available. The detector only ever asks about the
//! five fixed indicators declared here.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Fully qualified name of a module or type that may be loadable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorName(Cow<'static, str>);

impl IndicatorName {
    /// Create a name from a static string, usable in constants
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndicatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for IndicatorName {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for IndicatorName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for IndicatorName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Named scope under which presence is evaluated.
///
/// Queries made without a context use the current/default scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleContext(String);

impl ModuleContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleContext {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// What the presence of an indicator says about the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorRole {
    /// Servlet API support; every servlet indicator must be present for servlet mode
    Servlet,
    /// Alternate servlet container; its presence rules out reactive mode
    AlternateServlet,
    /// Reactive web framework
    Reactive,
    /// Classic (servlet-based) web framework; its presence rules out reactive mode
    ClassicWeb,
}

impl IndicatorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorRole::Servlet => "servlet",
            IndicatorRole::AlternateServlet => "alternate_servlet",
            IndicatorRole::Reactive => "reactive",
            IndicatorRole::ClassicWeb => "classic_web",
        }
    }
}

impl fmt::Display for IndicatorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed indicator together with its role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub role: IndicatorRole,
    pub name: IndicatorName,
}

pub const SERVLET_API_INDICATOR: IndicatorName =
    IndicatorName::from_static("jakarta.servlet.Servlet");

pub const WEB_CONTEXT_INDICATOR: IndicatorName =
    IndicatorName::from_static("org.springframework.web.context.ConfigurableWebApplicationContext");

/// Servlet indicators, in query order. Both must be present for servlet mode.
pub static SERVLET_INDICATORS: [IndicatorName; 2] = [SERVLET_API_INDICATOR, WEB_CONTEXT_INDICATOR];

pub const CLASSIC_WEB_INDICATOR: IndicatorName =
    IndicatorName::from_static("org.springframework.web.servlet.DispatcherServlet");

pub const REACTIVE_INDICATOR: IndicatorName =
    IndicatorName::from_static("org.springframework.web.reactive.DispatcherHandler");

pub const ALTERNATE_SERVLET_INDICATOR: IndicatorName =
    IndicatorName::from_static("org.glassfish.jersey.servlet.ServletContainer");

/// Every fixed indicator, in the order reflection candidates are collected
pub static INDICATORS: [Indicator; 5] = [
    Indicator {
        role: IndicatorRole::Servlet,
        name: SERVLET_API_INDICATOR,
    },
    Indicator {
        role: IndicatorRole::Servlet,
        name: WEB_CONTEXT_INDICATOR,
    },
    Indicator {
        role: IndicatorRole::AlternateServlet,
        name: ALTERNATE_SERVLET_INDICATOR,
    },
    Indicator {
        role: IndicatorRole::Reactive,
        name: REACTIVE_INDICATOR,
    },
    Indicator {
        role: IndicatorRole::ClassicWeb,
        name: CLASSIC_WEB_INDICATOR,
    },
];
