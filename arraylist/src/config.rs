use alloc::string::{String, ToString};

use crate::{CategoryColors, ColorMode, Placement};

pub const OPACITY_RANGE: (f32, f32) = (0.0, 1.0);
pub const SCALE_RANGE: (f32, f32) = (0.5, 1.5);
pub const FONT_SIZE_RANGE: (f32, f32) = (8.0, 24.0);
pub const BORDER_WIDTH_RANGE: (f32, f32) = (1.0, 10.0);
pub const MIN_FLOW_SPEED: f32 = 0.1;

/// Phase advance per 16ms reference frame for each unit of flow speed.
pub const SPEED_PER_FLOW: f64 = 0.01;

fn clamp(v: f32, (lo, hi): (f32, f32)) -> f32 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

/// Per-widget configuration.
///
/// Numeric fields are clamped on every write, so reading a field back always yields an in-range
/// value. Out-of-range input is never an error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ConfigRepr", into = "ConfigRepr")
)]
pub struct ListConfig {
    font: String,
    placement: Placement,
    flow_speed: f32,
    opacity: f32,
    scale: f32,
    font_size: f32,
    border_width: f32,
    category_colors: CategoryColors,
    color_mode: ColorMode,
    animations_disabled: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            font: "inherit".to_string(),
            placement: Placement::Top,
            flow_speed: 2.0,
            opacity: 1.0,
            scale: 1.0,
            font_size: 16.0,
            border_width: 3.0,
            category_colors: CategoryColors::default(),
            color_mode: ColorMode::Rainbow,
            animations_disabled: false,
        }
    }
}

impl ListConfig {
    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn set_font(&mut self, font: impl Into<String>) {
        self.font = font.into();
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    pub fn flow_speed(&self) -> f32 {
        self.flow_speed
    }

    /// Clamped to `[0.1, ∞)`. Returns the stored value.
    pub fn set_flow_speed(&mut self, flow_speed: f32) -> f32 {
        self.flow_speed = if flow_speed.is_nan() {
            MIN_FLOW_SPEED
        } else {
            flow_speed.max(MIN_FLOW_SPEED)
        };
        self.flow_speed
    }

    /// Phase advance per 16ms, derived from the flow speed.
    pub fn animation_speed(&self) -> f64 {
        SPEED_PER_FLOW * f64::from(self.flow_speed)
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) -> f32 {
        self.opacity = clamp(opacity, OPACITY_RANGE);
        self.opacity
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) -> f32 {
        self.scale = clamp(scale, SCALE_RANGE);
        self.scale
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: f32) -> f32 {
        self.font_size = clamp(font_size, FONT_SIZE_RANGE);
        self.font_size
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn set_border_width(&mut self, border_width: f32) -> f32 {
        self.border_width = clamp(border_width, BORDER_WIDTH_RANGE);
        self.border_width
    }

    pub fn category_colors(&self) -> &CategoryColors {
        &self.category_colors
    }

    pub fn set_category_colors(&mut self, category_colors: CategoryColors) {
        self.category_colors = category_colors;
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.color_mode = color_mode;
    }

    pub fn animations_disabled(&self) -> bool {
        self.animations_disabled
    }

    pub fn set_animations_disabled(&mut self, disabled: bool) {
        self.animations_disabled = disabled;
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.set_font(font);
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.set_placement(placement);
        self
    }

    pub fn with_flow_speed(mut self, flow_speed: f32) -> Self {
        self.set_flow_speed(flow_speed);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.set_opacity(opacity);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.set_scale(scale);
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.set_font_size(font_size);
        self
    }

    pub fn with_border_width(mut self, border_width: f32) -> Self {
        self.set_border_width(border_width);
        self
    }

    pub fn with_category_colors(mut self, category_colors: CategoryColors) -> Self {
        self.set_category_colors(category_colors);
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.set_color_mode(color_mode);
        self
    }

    pub fn with_animations_disabled(mut self, disabled: bool) -> Self {
        self.set_animations_disabled(disabled);
        self
    }
}

/// Wire shape of [`ListConfig`]; deserialized values pass through the clamping setters.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct ConfigRepr {
    font: String,
    placement: Placement,
    flow_speed: f32,
    opacity: f32,
    scale: f32,
    font_size: f32,
    border_width: f32,
    category_colors: CategoryColors,
    color_mode: ColorMode,
    animations_disabled: bool,
}

#[cfg(feature = "serde")]
impl Default for ConfigRepr {
    fn default() -> Self {
        ListConfig::default().into()
    }
}

#[cfg(feature = "serde")]
impl From<ConfigRepr> for ListConfig {
    fn from(r: ConfigRepr) -> Self {
        Self::default()
            .with_font(r.font)
            .with_placement(r.placement)
            .with_flow_speed(r.flow_speed)
            .with_opacity(r.opacity)
            .with_scale(r.scale)
            .with_font_size(r.font_size)
            .with_border_width(r.border_width)
            .with_category_colors(r.category_colors)
            .with_color_mode(r.color_mode)
            .with_animations_disabled(r.animations_disabled)
    }
}

#[cfg(feature = "serde")]
impl From<ListConfig> for ConfigRepr {
    fn from(c: ListConfig) -> Self {
        Self {
            font: c.font,
            placement: c.placement,
            flow_speed: c.flow_speed,
            opacity: c.opacity,
            scale: c.scale,
            font_size: c.font_size,
            border_width: c.border_width,
            category_colors: c.category_colors,
            color_mode: c.color_mode,
            animations_disabled: c.animations_disabled,
        }
    }
}
