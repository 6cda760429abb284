use alloc::sync::Arc;

use crate::{ListConfig, TextStyle};

/// Default duration of the enter and exit transitions.
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 200;

/// Measures the rendered width of `text` under `style`.
///
/// Contract: synchronous and pure. Identical inputs must yield identical widths, otherwise
/// ranking loses its determinism.
pub type MeasureText = Arc<dyn Fn(&str, &TextStyle<'_>) -> f32 + Send + Sync>;

/// Configuration for [`crate::ArrayList`].
///
/// Cheap to clone: the measurement closure is stored in an `Arc`.
pub struct ListOptions {
    pub config: ListConfig,
    pub measure: MeasureText,
    /// How long an item stays `Entering`/`Exiting` before settling or being removed.
    pub settle_duration_ms: u64,
}

impl Clone for ListOptions {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            measure: Arc::clone(&self.measure),
            settle_duration_ms: self.settle_duration_ms,
        }
    }
}

impl ListOptions {
    /// Creates options with the default configuration.
    ///
    /// `measure(text, style)` should return the pixel width of `text` as the host would render
    /// it. The engine caches results per text until the font or font size changes.
    pub fn new(measure: impl Fn(&str, &TextStyle<'_>) -> f32 + Send + Sync + 'static) -> Self {
        Self {
            config: ListConfig::default(),
            measure: Arc::new(measure),
            settle_duration_ms: DEFAULT_SETTLE_DURATION_MS,
        }
    }

    /// Options that measure text by character count scaled by font size.
    ///
    /// Useful for terminals, tests and hosts without a text shaper.
    pub fn monospace() -> Self {
        Self::new(|text, style| text.chars().count() as f32 * style.font_size * 0.6)
    }

    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_measure(
        mut self,
        measure: impl Fn(&str, &TextStyle<'_>) -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.measure = Arc::new(measure);
        self
    }

    pub fn with_settle_duration_ms(mut self, settle_duration_ms: u64) -> Self {
        self.settle_duration_ms = settle_duration_ms;
        self
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("config", &self.config)
            .field("settle_duration_ms", &self.settle_duration_ms)
            .finish_non_exhaustive()
    }
}
