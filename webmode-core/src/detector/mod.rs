//! Web application type detection
//!
//! [`WebApplicationTypeDetector`] deduces the [`ApplicationMode`] from the
//! answers of an injected [`PresenceOracle`]. It holds nothing but the oracle,
//! so every call is an independent evaluation.

mod hints;

pub use hints::{HintsError, ReflectionHints, TypeHint};

use crate::models::{
    ApplicationMode, DetectionReport, IndicatorName, ModuleContext, ALTERNATE_SERVLET_INDICATOR,
    CLASSIC_WEB_INDICATOR, INDICATORS, REACTIVE_INDICATOR, SERVLET_INDICATORS,
};
use crate::oracle::PresenceOracle;

/// Deduces the application mode from module presence
#[derive(Debug, Clone)]
pub struct WebApplicationTypeDetector<O> {
    oracle: O,
}

impl<O: PresenceOracle> WebApplicationTypeDetector<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Deduce the application mode using the default module context.
    ///
    /// Reactive wins when its framework is present and neither the classic web
    /// framework nor the alternate servlet container is. Otherwise every servlet
    /// indicator must be present for servlet mode; the first missing one ends
    /// the check with [`ApplicationMode::None`].
    pub fn deduce(&self) -> ApplicationMode {
        if self.present(&REACTIVE_INDICATOR, None)
            && !self.present(&CLASSIC_WEB_INDICATOR, None)
            && !self.present(&ALTERNATE_SERVLET_INDICATOR, None)
        {
            tracing::debug!(mode = %ApplicationMode::Reactive, "Reactive web framework present without servlet stack");
            return ApplicationMode::Reactive;
        }

        for name in SERVLET_INDICATORS.iter() {
            if !self.present(name, None) {
                tracing::debug!(mode = %ApplicationMode::None, missing = %name, "Servlet indicator absent");
                return ApplicationMode::None;
            }
        }

        tracing::debug!(mode = %ApplicationMode::Servlet, "All servlet indicators present");
        ApplicationMode::Servlet
    }

    /// Indicators present under `context` that need reflective access at run time.
    ///
    /// Every fixed indicator is queried, in a stable order, regardless of what
    /// [`deduce`](Self::deduce) would return.
    pub fn collect_reflection_candidates(
        &self,
        context: Option<&ModuleContext>,
    ) -> Vec<IndicatorName> {
        INDICATORS
            .iter()
            .filter(|indicator| self.present(&indicator.name, context))
            .map(|indicator| indicator.name.clone())
            .collect()
    }

    /// Register every reflection candidate under `context` with `hints`.
    ///
    /// Returns the number of names newly added to the registry.
    pub fn register_hints(
        &self,
        hints: &mut ReflectionHints,
        context: Option<&ModuleContext>,
    ) -> usize {
        self.collect_reflection_candidates(context)
            .into_iter()
            .filter(|name| hints.register_type(name.clone()))
            .count()
    }

    /// Deduce the mode and record which indicators were present
    pub fn report(&self) -> DetectionReport {
        DetectionReport::new(self.deduce(), self.collect_reflection_candidates(None))
    }

    fn present(&self, name: &IndicatorName, context: Option<&ModuleContext>) -> bool {
        let present = self.oracle.is_present(name, context);
        tracing::trace!(name = %name, context = ?context.map(ModuleContext::name), present, "Presence query");
        present
    }
}
