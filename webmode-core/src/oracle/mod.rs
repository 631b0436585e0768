//! Presence oracles
//!
//! A presence oracle answers whether a named module is loadable under a
//! module-loading context. The detector never looks anything up itself; it
//! only asks the oracle it was constructed with.

mod manifest;
mod module_set;

pub use manifest::{ContextEntry, ManifestError, ManifestFormat, ModuleManifest};
pub use module_set::ModuleSet;

use crate::models::{IndicatorName, ModuleContext};
use std::sync::Arc;

/// Answers presence queries for indicator names.
///
/// A `None` context means the current/default scope. Every answer is taken as
/// authoritative at the moment of the call.
pub trait PresenceOracle {
    fn is_present(&self, name: &IndicatorName, context: Option<&ModuleContext>) -> bool;
}

impl<T: PresenceOracle + ?Sized> PresenceOracle for &T {
    fn is_present(&self, name: &IndicatorName, context: Option<&ModuleContext>) -> bool {
        (**self).is_present(name, context)
    }
}

impl<T: PresenceOracle + ?Sized> PresenceOracle for Box<T> {
    fn is_present(&self, name: &IndicatorName, context: Option<&ModuleContext>) -> bool {
        (**self).is_present(name, context)
    }
}

impl<T: PresenceOracle + ?Sized> PresenceOracle for Arc<T> {
    fn is_present(&self, name: &IndicatorName, context: Option<&ModuleContext>) -> bool {
        (**self).is_present(name, context)
    }
}

/// Oracle backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnOracle<F>(F);

impl<F> PresenceOracle for FnOracle<F>
where
    F: Fn(&IndicatorName, Option<&ModuleContext>) -> bool,
{
    fn is_present(&self, name: &IndicatorName, context: Option<&ModuleContext>) -> bool {
        (self.0)(name, context)
    }
}

impl<F> std::fmt::Debug for FnOracle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnOracle")
    }
}

/// Wrap a closure as a presence oracle
pub fn from_fn<F>(f: F) -> FnOracle<F>
where
    F: Fn(&IndicatorName, Option<&ModuleContext>) -> bool,
{
    FnOracle(f)
}
