use alloc::string::String;
use alloc::vec::Vec;

use crate::animator::{ListAnimator, RankedEntry, RenderedItem};
use crate::clock::AnimationClock;
use crate::color::{ColorEngine, RAINBOW};
use crate::ranking::{self, WidthCache};
use crate::registry::{EnableOutcome, FeatureRegistry};
use crate::{
    CategoryColors, ColorMode, ItemState, ItemView, ListConfig, ListEvent, ListOptions,
    ListSnapshot, Placement, TextStyle,
};

/// A headless feature list.
///
/// This type is UI-agnostic:
/// - It never reads the wall clock. Every timed operation takes the host's `now_ms`.
/// - It never touches a display. Changes are queued as [`ListEvent`]s for the adapter to
///   apply (see [`ArrayList::drain_events`]), and the current state can be read at any time.
///
/// Flow: `enable`/`disable` → rank enabled features → reconcile displayed items → recolor
/// settled items.
#[derive(Clone, Debug)]
pub struct ArrayList {
    options: ListOptions,
    registry: FeatureRegistry,
    animator: ListAnimator,
    clock: AnimationClock,
    widths: WidthCache,
    now_ms: u64,
}

impl ArrayList {
    /// Creates an empty list with its animation clock running.
    pub fn new(options: ListOptions) -> Self {
        ldebug!(
            settle_duration_ms = options.settle_duration_ms,
            placement = ?options.config.placement(),
            "ArrayList::new"
        );
        let mut clock = AnimationClock::new(RAINBOW.len());
        clock.start();
        Self {
            animator: ListAnimator::new(options.settle_duration_ms),
            options,
            registry: FeatureRegistry::new(),
            clock,
            widths: WidthCache::new(),
            now_ms: 0,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn config(&self) -> &ListConfig {
        &self.options.config
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    pub fn animator(&self) -> &ListAnimator {
        &self.animator
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// The latest host timestamp seen by any timed call.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn observe(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Moves the list's notion of "now" forward to `now_ms`, shifting every in-flight transition
    /// by the same amount so none of them completes early.
    ///
    /// For hosts whose frame clock is only known after features were toggled.
    pub fn rebase(&mut self, now_ms: u64) {
        let delta = now_ms.saturating_sub(self.now_ms);
        if delta == 0 {
            return;
        }
        ltrace!(from = self.now_ms, to = now_ms, "rebase");
        self.animator.shift(delta);
        self.now_ms = now_ms;
    }

    /// Replaces all options, re-measuring and re-ranking.
    pub fn set_options(&mut self, options: ListOptions) {
        self.options = options;
        self.animator.set_settle_ms(self.options.settle_duration_ms);
        self.widths.invalidate();
        ltrace!(config = ?self.options.config, "ArrayList::set_options");
        self.rerank();
    }

    /// Replaces the configuration, applying only the reactions whose inputs changed.
    pub fn set_config(&mut self, config: ListConfig) {
        let prev = core::mem::replace(&mut self.options.config, config);
        let next = &self.options.config;
        if prev.font() != next.font() || prev.font_size() != next.font_size() {
            self.widths.invalidate();
        }
        if prev.placement() != next.placement() {
            self.rerank();
        } else if prev.color_mode() != next.color_mode()
            || prev.category_colors() != next.category_colors()
        {
            self.recolor();
        }
    }

    /// Clones the current configuration, applies `f`, then delegates to `set_config`.
    pub fn update_config(&mut self, f: impl FnOnce(&mut ListConfig)) {
        let mut next = self.options.config.clone();
        f(&mut next);
        self.set_config(next);
    }

    /// Enables `name`, creating it on first use, then re-ranks.
    ///
    /// Enabling an already enabled feature keeps its recency; `display_name` and `category`
    /// overwrite stored values whenever they are `Some`.
    pub fn enable(
        &mut self,
        name: &str,
        display_name: Option<&str>,
        category: Option<&str>,
        now_ms: u64,
    ) -> EnableOutcome {
        self.observe(now_ms);
        let outcome = self.registry.enable(name, display_name, category);
        ldebug!(name, ?outcome, now_ms, "enable");
        self.rerank();
        outcome
    }

    /// Disables `name` and starts its exit transition. Unknown or already disabled names are a
    /// no-op and return `false`.
    pub fn disable(&mut self, name: &str, now_ms: u64) -> bool {
        self.observe(now_ms);
        if !self.registry.disable(name) {
            ltrace!(name, "disable: not enabled");
            return false;
        }
        ldebug!(name, now_ms, "disable");
        self.rerank();
        true
    }

    /// Advances the list to `now_ms`: completes due transitions, then moves the rainbow phase.
    ///
    /// Returns `true` if anything visible may have changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.observe(now_ms);
        let advanced = self.animator.advance(now_ms);
        if advanced.removed > 0 {
            self.rerank();
        } else if advanced.settled > 0 {
            self.recolor();
        }

        let moved = self.clock.tick(now_ms, self.options.config.animation_speed());
        if moved {
            self.recolor();
        }
        ltrace!(now_ms, offset = self.clock.offset(), moved, "tick");
        moved || !advanced.is_empty()
    }

    pub fn start_clock(&mut self) {
        self.clock.start();
    }

    pub fn stop_clock(&mut self) {
        self.clock.stop();
    }

    /// Drops every displayed item at once and stops the clock. Feature records are kept.
    pub fn clear(&mut self) {
        self.clock.stop();
        self.animator.clear();
    }

    /// Measured width of `text` under the current font, through the width cache.
    pub fn text_width(&mut self, text: &str) -> f32 {
        let style = TextStyle {
            font: self.options.config.font(),
            font_size: self.options.config.font_size(),
        };
        let measure = &self.options.measure;
        self.widths.width(text, |t| measure(t, &style))
    }

    /// Names of the enabled features in ranked order.
    pub fn ranked_names(&mut self) -> Vec<String> {
        let style = TextStyle {
            font: self.options.config.font(),
            font_size: self.options.config.font_size(),
        };
        let measure = &self.options.measure;
        let widths = &mut self.widths;
        ranking::rank(
            self.registry.enabled(),
            self.options.config.placement(),
            |text| widths.width(text, |t| measure(t, &style)),
        )
        .into_iter()
        .map(|f| f.name.clone())
        .collect()
    }

    /// Re-ranks enabled features and reconciles the display against the new order.
    pub fn rerank(&mut self) {
        let config = &self.options.config;
        let style = TextStyle {
            font: config.font(),
            font_size: config.font_size(),
        };
        let measure = &self.options.measure;
        let widths = &mut self.widths;
        let ranked = ranking::rank(self.registry.enabled(), config.placement(), |text| {
            widths.width(text, |t| measure(t, &style))
        });

        let engine = ColorEngine {
            mode: config.color_mode(),
            categories: config.category_colors(),
            palette: &RAINBOW,
            placement: config.placement(),
            offset: self.clock.offset(),
        };
        let entries: Vec<RankedEntry<'_>> = ranked
            .iter()
            .map(|f| RankedEntry {
                name: &f.name,
                text: &f.display_name,
                initial_color: engine.static_color(f.category.as_deref()),
            })
            .collect();

        self.animator
            .reconcile(&entries, self.now_ms, !config.animations_disabled());
        self.recolor();
    }

    /// Recomputes colors of settled items. Returns how many changed.
    pub fn recolor(&mut self) -> usize {
        let config = &self.options.config;
        let engine = ColorEngine {
            mode: config.color_mode(),
            categories: config.category_colors(),
            palette: &RAINBOW,
            placement: config.placement(),
            offset: self.clock.offset(),
        };
        let registry = &self.registry;
        self.animator.recolor(|index, settled, name| {
            let category = registry.get(name).and_then(|f| f.category.as_deref());
            engine.color_for(index, settled, category)
        })
    }

    pub fn set_font(&mut self, font: impl Into<String>) {
        self.options.config.set_font(font);
        self.widths.invalidate();
    }

    /// Clamped to `[8, 24]`; invalidates cached widths.
    pub fn set_font_size(&mut self, font_size: f32) -> f32 {
        let v = self.options.config.set_font_size(font_size);
        self.widths.invalidate();
        v
    }

    /// Flips sort direction and rainbow indexing, then re-ranks.
    pub fn set_placement(&mut self, placement: Placement) {
        self.options.config.set_placement(placement);
        self.rerank();
    }

    pub fn set_flow_speed(&mut self, flow_speed: f32) -> f32 {
        self.options.config.set_flow_speed(flow_speed)
    }

    pub fn set_opacity(&mut self, opacity: f32) -> f32 {
        self.options.config.set_opacity(opacity)
    }

    pub fn set_scale(&mut self, scale: f32) -> f32 {
        self.options.config.set_scale(scale)
    }

    pub fn set_border_width(&mut self, border_width: f32) -> f32 {
        self.options.config.set_border_width(border_width)
    }

    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.options.config.set_color_mode(color_mode);
        self.recolor();
    }

    pub fn set_category_colors(&mut self, category_colors: CategoryColors) {
        self.options.config.set_category_colors(category_colors);
        self.recolor();
    }

    pub fn set_animations_disabled(&mut self, disabled: bool) {
        self.options.config.set_animations_disabled(disabled);
    }

    /// Display sequence by feature name, exiting items included.
    pub fn order(&self) -> &[String] {
        self.animator.order()
    }

    pub fn item(&self, name: &str) -> Option<&RenderedItem> {
        self.animator.get(name)
    }

    pub fn items(&self) -> impl Iterator<Item = ItemView<'_>> + '_ {
        self.animator.iter().map(|item| ItemView {
            id: item.id,
            name: &item.name,
            text: &item.text,
            transition: item.transition,
            color: item.color,
        })
    }

    pub fn for_each_item(&self, mut f: impl FnMut(ItemView<'_>)) {
        for view in self.items() {
            f(view);
        }
    }

    pub fn len(&self) -> usize {
        self.animator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animator.is_empty()
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            placement: self.options.config.placement(),
            offset: self.clock.offset(),
            items: self
                .animator
                .iter()
                .map(|item| ItemState {
                    id: item.id,
                    name: item.name.clone(),
                    text: item.text.clone(),
                    transition: item.transition,
                    color: item.color,
                })
                .collect(),
        }
    }

    /// Takes the events queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<ListEvent> {
        self.animator.take_events()
    }
}
