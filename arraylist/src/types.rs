use alloc::string::String;

use crate::Rgb;

/// The edge the list is anchored to. Controls sort direction and rainbow indexing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    #[default]
    Top,
    Bottom,
}

impl Placement {
    pub fn is_bottom(self) -> bool {
        matches!(self, Self::Bottom)
    }
}

/// Per-item lifecycle: `Entering -> Settled -> Exiting -> (removed)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    Entering,
    Settled,
    Exiting,
}

impl Transition {
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Settled)
    }
}

/// Identity of a rendered item. Never reused within one engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u64);

/// A named toggleable entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    pub name: String,
    pub display_name: String,
    /// Only consulted by categorized coloring.
    pub category: Option<String>,
    pub enabled: bool,
    /// Logical recency stamp. Strictly increasing across the registry.
    pub timestamp: u64,
}

/// Text styling inputs handed to the measurement function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle<'a> {
    pub font: &'a str,
    pub font_size: f32,
}

/// A borrowed view of one displayed item, in display order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemView<'a> {
    pub id: ItemId,
    pub name: &'a str,
    pub text: &'a str,
    pub transition: Transition,
    pub color: Option<Rgb>,
}

/// State changes produced by the engine, in the order they happened.
///
/// Adapters drain these with [`crate::ArrayList::drain_events`] and mirror them onto their
/// display surface.
#[derive(Clone, Debug, PartialEq)]
pub enum ListEvent {
    /// A new item must be attached to the display.
    Inserted {
        id: ItemId,
        name: String,
        text: String,
        transition: Transition,
    },
    TextChanged {
        id: ItemId,
        text: String,
    },
    TransitionChanged {
        id: ItemId,
        transition: Transition,
    },
    /// Accent marker and text color, both set to `color`.
    Recolored {
        id: ItemId,
        color: Rgb,
    },
    /// The item must be detached from the display.
    Removed {
        id: ItemId,
    },
    /// The display sequence changed; see [`crate::ArrayList::order`].
    Reordered,
}
