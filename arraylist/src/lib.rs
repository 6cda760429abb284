//! A headless engine for animated feature lists ("array lists" in game HUDs).
//!
//! For the surface binding and the frame-driven widget, see the `arraylist-adapter` crate.
//!
//! This crate owns the list state and its algorithms:
//! - a feature registry with enable/disable and recency stamps,
//! - deterministic ranking by measured display width, tie-broken by recency,
//! - an enter/settle/exit lifecycle for displayed items with cancellable timers,
//! - rainbow, categorized and literal color policies, driven by a frame-rate independent clock.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - a text measurement function (see [`ListOptions::new`])
//! - frame timestamps in milliseconds
//! - a display that applies the queued [`ListEvent`]s
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod clock;
mod color;
mod config;
mod key;
mod list;
mod options;
mod ranking;
mod registry;
mod state;
mod types;


pub use animator::{Advanced, ListAnimator, RankedEntry, RenderedItem, TransitionTimer};
pub use clock::{AnimationClock, REFERENCE_FRAME_MS};
pub use color::{
    CategoryColors, ColorEngine, ColorMode, ColorParseError, RAINBOW, Rgb, interpolate,
    rainbow_position, wrap_phase,
};
pub use config::{
    BORDER_WIDTH_RANGE, FONT_SIZE_RANGE, ListConfig, MIN_FLOW_SPEED, OPACITY_RANGE, SCALE_RANGE,
    SPEED_PER_FLOW,
};
pub use list::ArrayList;
pub use options::{DEFAULT_SETTLE_DURATION_MS, ListOptions, MeasureText};
pub use ranking::{WidthCache, compare, rank};
pub use registry::{EnableOutcome, FeatureRegistry};
pub use state::{ItemState, ListSnapshot};
pub use types::{Feature, ItemId, ItemView, ListEvent, Placement, TextStyle, Transition};
