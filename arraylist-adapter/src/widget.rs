use alloc::string::{String, ToString};
use alloc::vec::Vec;

use arraylist::{
    ArrayList, CategoryColors, ColorMode, EnableOutcome, ItemId, ListConfig, ListEvent,
    ListOptions, Placement,
};

use crate::{Easing, Error, Host, Result, Slide, Surface};

/// A feature list bound to a display surface.
///
/// This type holds the engine and the surface, and keeps them in sync. The host drives it by
/// calling:
/// - `enable` / `disable` when features toggle
/// - `tick(now_ms)` every frame, with the host's monotonic frame timestamp
/// - the configuration setters whenever the user changes a setting
///
/// Every call applies its visual effect to the surface before returning.
#[derive(Debug)]
pub struct Widget<S> {
    list: ArrayList,
    surface: S,
    visible: bool,
    framed: bool,
}

impl<S: Surface> Widget<S> {
    /// Resolves the surface for `selector` and mounts a widget on it.
    ///
    /// Fails with [`Error::HostSurfaceMissing`] if the host has no such surface.
    pub fn mount<H>(host: &mut H, selector: &str, options: ListOptions) -> Result<Self>
    where
        H: Host<Surface = S>,
    {
        let Some(surface) = host.resolve_surface(selector) else {
            lwarn!(selector, "host surface missing");
            return Err(Error::HostSurfaceMissing {
                selector: selector.to_string(),
            });
        };
        ldebug!(selector, "Widget::mount");
        Ok(Self::new(surface, options))
    }

    /// Wraps an already resolved surface. The animation clock starts immediately.
    pub fn new(surface: S, options: ListOptions) -> Self {
        let mut w = Self {
            list: ArrayList::new(options),
            surface,
            visible: true,
            framed: false,
        };
        w.apply_config_styles();
        w
    }

    fn apply_config_styles(&mut self) {
        let config = self.list.config();
        self.surface.set_font(config.font());
        self.surface.set_placement(config.placement());
        self.surface.set_opacity(config.opacity());
        self.surface.set_scale(config.scale());
        self.surface.set_font_size(config.font_size());
        let thickness = config.border_width();
        for id in self.item_ids() {
            self.surface.set_item_thickness(id, thickness);
        }
    }

    fn item_ids(&self) -> Vec<ItemId> {
        self.list.items().map(|item| item.id).collect()
    }

    /// Mirrors queued engine events onto the surface.
    fn flush(&mut self) {
        let events = self.list.drain_events();
        if events.is_empty() {
            return;
        }
        ltrace!(count = events.len(), "Widget::flush");
        let thickness = self.list.config().border_width();
        for event in events {
            match event {
                ListEvent::Inserted {
                    id,
                    text,
                    transition,
                    ..
                } => self.surface.attach_item(id, &text, transition, thickness),
                ListEvent::TextChanged { id, text } => self.surface.set_item_text(id, &text),
                ListEvent::TransitionChanged { id, transition } => {
                    self.surface.set_item_transition(id, transition);
                }
                ListEvent::Recolored { id, color } => {
                    self.surface.set_item_accent(id, color);
                    self.surface.set_item_text_color(id, color);
                }
                ListEvent::Removed { id } => self.surface.detach_item(id),
                ListEvent::Reordered => {
                    let order = self.item_ids();
                    self.surface.set_order(&order);
                }
            }
        }
    }

    pub fn list(&self) -> &ArrayList {
        &self.list
    }

    pub fn config(&self) -> &ListConfig {
        self.list.config()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Enables `name` at the last timestamp passed to [`Widget::tick`].
    ///
    /// Before the first frame, the transition starts at that first frame instead.
    pub fn enable(
        &mut self,
        name: &str,
        display_name: Option<&str>,
        category: Option<&str>,
    ) -> EnableOutcome {
        let now_ms = self.list.now_ms();
        let outcome = self.list.enable(name, display_name, category, now_ms);
        self.flush();
        outcome
    }

    /// Disables `name`; unknown names are ignored.
    pub fn disable(&mut self, name: &str) -> bool {
        let now_ms = self.list.now_ms();
        let changed = self.list.disable(name, now_ms);
        self.flush();
        changed
    }

    /// Per-frame entry point.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.framed {
            self.framed = true;
            self.list.rebase(now_ms);
        }
        let changed = self.list.tick(now_ms);
        self.flush();
        changed
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.surface.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.surface.set_visible(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn font(&self) -> &str {
        self.list.config().font()
    }

    pub fn set_font(&mut self, font: impl Into<String>) {
        self.list.set_font(font);
        self.surface.set_font(self.list.config().font());
    }

    pub fn placement(&self) -> Placement {
        self.list.config().placement()
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.surface.set_placement(placement);
        self.list.set_placement(placement);
        self.flush();
    }

    pub fn flow_speed(&self) -> f32 {
        self.list.config().flow_speed()
    }

    pub fn set_flow_speed(&mut self, flow_speed: f32) -> f32 {
        self.list.set_flow_speed(flow_speed)
    }

    pub fn opacity(&self) -> f32 {
        self.list.config().opacity()
    }

    pub fn set_opacity(&mut self, opacity: f32) -> f32 {
        let v = self.list.set_opacity(opacity);
        self.surface.set_opacity(v);
        v
    }

    pub fn scale(&self) -> f32 {
        self.list.config().scale()
    }

    pub fn set_scale(&mut self, scale: f32) -> f32 {
        let v = self.list.set_scale(scale);
        self.surface.set_scale(v);
        v
    }

    pub fn font_size(&self) -> f32 {
        self.list.config().font_size()
    }

    pub fn set_font_size(&mut self, font_size: f32) -> f32 {
        let v = self.list.set_font_size(font_size);
        self.surface.set_font_size(v);
        v
    }

    pub fn border_width(&self) -> f32 {
        self.list.config().border_width()
    }

    /// Applies the clamped width to every displayed item's accent marker.
    pub fn set_border_width(&mut self, border_width: f32) -> f32 {
        let v = self.list.set_border_width(border_width);
        for id in self.item_ids() {
            self.surface.set_item_thickness(id, v);
        }
        v
    }

    pub fn color_mode(&self) -> ColorMode {
        self.list.config().color_mode()
    }

    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.list.set_color_mode(color_mode);
        self.flush();
    }

    pub fn category_colors(&self) -> &CategoryColors {
        self.list.config().category_colors()
    }

    pub fn set_category_colors(&mut self, category_colors: CategoryColors) {
        self.list.set_category_colors(category_colors);
        self.flush();
    }

    pub fn animations_disabled(&self) -> bool {
        self.list.config().animations_disabled()
    }

    pub fn set_animations_disabled(&mut self, disabled: bool) {
        self.list.set_animations_disabled(disabled);
    }

    /// Replaces the whole configuration and re-applies every surface style.
    pub fn set_config(&mut self, config: ListConfig) {
        self.list.set_config(config);
        self.apply_config_styles();
        self.flush();
    }

    /// Slide of `name`'s item; `None` if it is settled or not displayed.
    pub fn slide(&self, name: &str, easing: Easing) -> Option<Slide> {
        let item = self.list.item(name)?;
        Slide::for_transition(
            item.transition,
            item.since_ms,
            self.list.options().settle_duration_ms,
            easing,
        )
    }

    /// Stops the clock, detaches every item, and hands the surface back.
    pub fn dispose(mut self) -> S {
        ldebug!(items = self.list.len(), "Widget::dispose");
        self.list.clear();
        self.flush();
        self.surface
    }
}
