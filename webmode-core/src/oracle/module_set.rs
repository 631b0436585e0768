//! In-memory presence oracle

use super::PresenceOracle;
use crate::models::{IndicatorName, ModuleContext};
use std::collections::{BTreeMap, BTreeSet};

/// Set of module names known to be present.
///
/// Names in the default scope are visible from every context. A named context
/// sees the default names plus whatever was added to it specifically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleSet {
    default: BTreeSet<String>,
    contexts: BTreeMap<String, BTreeSet<String>>,
}

impl ModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with the given names present in the default scope
    pub fn with_present<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.extend(names);
        set
    }

    /// Mark a name as present in the default scope
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.default.insert(name.into())
    }

    /// Mark a name as present in a named context only
    pub fn insert_in(&mut self, context: impl Into<String>, name: impl Into<String>) -> bool {
        self.contexts
            .entry(context.into())
            .or_default()
            .insert(name.into())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.default.remove(name)
    }

    /// Names of the contexts that carry entries of their own
    pub fn context_names(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_empty() && self.contexts.values().all(BTreeSet::is_empty)
    }

    /// Fold another set into this one
    pub fn merge(&mut self, other: ModuleSet) {
        self.default.extend(other.default);
        for (context, names) in other.contexts {
            self.contexts.entry(context).or_default().extend(names);
        }
    }
}

impl<S: Into<String>> Extend<S> for ModuleSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.default.extend(iter.into_iter().map(Into::into));
    }
}

impl PresenceOracle for ModuleSet {
    fn is_present(&self, name: &IndicatorName, context: Option<&ModuleContext>) -> bool {
        let name = name.as_str();
        if self.default.contains(name) {
            return true;
        }
        context
            .and_then(|ctx| self.contexts.get(ctx.name()))
            .is_some_and(|names| names.contains(name))
    }
}
