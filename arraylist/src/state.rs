use alloc::string::String;
use alloc::vec::Vec;

use crate::{ItemId, Placement, Rgb, Transition};

/// A serializable snapshot of one displayed item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: ItemId,
    pub name: String,
    pub text: String,
    pub transition: Transition,
    pub color: Option<Rgb>,
}

/// A snapshot of what the list currently shows, in display order.
///
/// Handy for hosts that re-render from scratch each frame, and for diffing in tests.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListSnapshot {
    pub placement: Placement,
    pub offset: f64,
    pub items: Vec<ItemState>,
}

impl ListSnapshot {
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|i| i.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&ItemState> {
        self.items.iter().find(|i| i.name == name)
    }
}
