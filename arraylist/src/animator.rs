use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::mem;

use crate::key::NameMap;
use crate::{ItemId, ListEvent, Rgb, Transition};

/// A pending transition completion.
///
/// The token is compared against the owning item's current timer when the deadline passes; a
/// mismatch means the item moved on and the completion is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionTimer {
    pub token: u64,
    pub due_ms: u64,
}

/// One displayed feature.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem {
    pub id: ItemId,
    pub name: String,
    pub text: String,
    pub transition: Transition,
    /// Last color applied; `None` until first colored.
    pub color: Option<Rgb>,
    pub timer: Option<TransitionTimer>,
    /// When the current transition state was entered.
    pub since_ms: u64,
}

#[derive(Clone, Debug)]
struct Scheduled {
    name: String,
    id: ItemId,
    timer: TransitionTimer,
}

/// An entry of the ranked order handed to [`ListAnimator::reconcile`].
#[derive(Clone, Copy, Debug)]
pub struct RankedEntry<'a> {
    pub name: &'a str,
    pub text: &'a str,
    /// Color for a freshly inserted item, if the active mode can tell without a position.
    pub initial_color: Option<Rgb>,
}

/// Outcome of [`ListAnimator::advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Advanced {
    pub settled: usize,
    pub removed: usize,
}

impl Advanced {
    pub fn is_empty(&self) -> bool {
        self.settled == 0 && self.removed == 0
    }
}

/// Reconciles the ranked order against what is on display.
///
/// There is at most one item per feature name. Re-enabling a name whose item is still exiting
/// reclaims that item instead of creating a second one.
#[derive(Clone, Debug)]
pub struct ListAnimator {
    items: NameMap<RenderedItem>,
    order: Vec<String>,
    queue: Vec<Scheduled>,
    next_id: u64,
    next_token: u64,
    settle_ms: u64,
    events: Vec<ListEvent>,
}

impl ListAnimator {
    pub fn new(settle_ms: u64) -> Self {
        Self {
            items: NameMap::default(),
            order: Vec::new(),
            queue: Vec::new(),
            next_id: 0,
            next_token: 0,
            settle_ms,
            events: Vec::new(),
        }
    }

    pub fn settle_ms(&self) -> u64 {
        self.settle_ms
    }

    pub fn set_settle_ms(&mut self, settle_ms: u64) {
        self.settle_ms = settle_ms;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RenderedItem> {
        self.items.get(name)
    }

    /// Display sequence, including exiting items.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &RenderedItem> + '_ {
        self.order.iter().filter_map(|name| self.items.get(name))
    }

    pub fn settled_count(&self) -> usize {
        self.iter().filter(|item| item.transition.is_settled()).count()
    }

    /// Number of scheduled completions, stale ones included.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn take_events(&mut self) -> Vec<ListEvent> {
        mem::take(&mut self.events)
    }

    fn schedule(&mut self, item: &mut RenderedItem, transition: Transition, now_ms: u64) {
        let timer = TransitionTimer {
            token: self.next_token,
            due_ms: now_ms.saturating_add(self.settle_ms),
        };
        self.next_token = self.next_token.wrapping_add(1);
        item.transition = transition;
        item.since_ms = now_ms;
        item.timer = Some(timer);
        self.queue.push(Scheduled {
            name: item.name.clone(),
            id: item.id,
            timer,
        });
    }

    /// Rebuilds the display sequence from `ranked`.
    ///
    /// - names with an item keep it (an exiting one is reclaimed and re-enters),
    /// - new names get a fresh item, `Entering` when `animate` and `Settled` otherwise,
    /// - items whose name left the ranking start exiting, or are removed at once without
    ///   `animate`; exiting items keep their previous slot until removal.
    pub fn reconcile(&mut self, ranked: &[RankedEntry<'_>], now_ms: u64, animate: bool) {
        let previous = mem::take(&mut self.order);
        let mut order = Vec::with_capacity(ranked.len());

        for entry in ranked {
            if let Some(mut item) = self.items.remove(entry.name) {
                if item.transition == Transition::Exiting {
                    ldebug!(name = entry.name, id = item.id.0, "reclaiming exiting item");
                    if animate {
                        self.schedule(&mut item, Transition::Entering, now_ms);
                    } else {
                        item.transition = Transition::Settled;
                        item.since_ms = now_ms;
                        item.timer = None;
                    }
                    self.events.push(ListEvent::TransitionChanged {
                        id: item.id,
                        transition: item.transition,
                    });
                }
                if item.text != entry.text {
                    item.text = entry.text.to_string();
                    self.events.push(ListEvent::TextChanged {
                        id: item.id,
                        text: item.text.clone(),
                    });
                }
                self.items.insert(entry.name.to_string(), item);
            } else {
                let id = ItemId(self.next_id);
                self.next_id = self.next_id.wrapping_add(1);
                let mut item = RenderedItem {
                    id,
                    name: entry.name.to_string(),
                    text: entry.text.to_string(),
                    transition: Transition::Settled,
                    color: None,
                    timer: None,
                    since_ms: now_ms,
                };
                if animate {
                    self.schedule(&mut item, Transition::Entering, now_ms);
                }
                ldebug!(name = entry.name, id = id.0, transition = ?item.transition, "item inserted");
                self.events.push(ListEvent::Inserted {
                    id,
                    name: item.name.clone(),
                    text: item.text.clone(),
                    transition: item.transition,
                });
                if let Some(color) = entry.initial_color {
                    item.color = Some(color);
                    self.events.push(ListEvent::Recolored { id, color });
                }
                self.items.insert(item.name.clone(), item);
            }
            order.push(entry.name.to_string());
        }

        for (slot, name) in previous.iter().enumerate() {
            if ranked.iter().any(|e| e.name == name.as_str()) {
                continue;
            }
            let Some(mut item) = self.items.remove(name) else {
                continue;
            };
            if item.transition != Transition::Exiting {
                if !animate {
                    ldebug!(name = name.as_str(), id = item.id.0, "item removed");
                    self.events.push(ListEvent::Removed { id: item.id });
                    continue;
                }
                self.schedule(&mut item, Transition::Exiting, now_ms);
                ldebug!(name = name.as_str(), id = item.id.0, "item exiting");
                self.events.push(ListEvent::TransitionChanged {
                    id: item.id,
                    transition: Transition::Exiting,
                });
            }
            order.insert(slot.min(order.len()), name.clone());
            self.items.insert(name.clone(), item);
        }

        if order != previous {
            self.events.push(ListEvent::Reordered);
        }
        self.order = order;
    }

    /// Fires every completion due at `now_ms`, in deadline order.
    ///
    /// A completion whose item was removed, replaced, or re-timed since scheduling is a no-op.
    pub fn advance(&mut self, now_ms: u64) -> Advanced {
        let mut out = Advanced::default();
        if self.queue.iter().all(|s| s.timer.due_ms > now_ms) {
            return out;
        }

        let (mut due, rest): (Vec<_>, Vec<_>) = mem::take(&mut self.queue)
            .into_iter()
            .partition(|s| s.timer.due_ms <= now_ms);
        self.queue = rest;
        due.sort_by_key(|s| (s.timer.due_ms, s.timer.token));

        for scheduled in due {
            let Some(item) = self.items.get_mut(&scheduled.name) else {
                ltrace!(name = scheduled.name.as_str(), "stale completion: item gone");
                continue;
            };
            if item.id != scheduled.id || item.timer != Some(scheduled.timer) {
                ltrace!(name = scheduled.name.as_str(), "stale completion: re-timed");
                continue;
            }
            item.timer = None;
            match item.transition {
                Transition::Entering => {
                    item.transition = Transition::Settled;
                    item.since_ms = scheduled.timer.due_ms;
                    self.events.push(ListEvent::TransitionChanged {
                        id: item.id,
                        transition: Transition::Settled,
                    });
                    out.settled += 1;
                }
                Transition::Exiting => {
                    let id = item.id;
                    self.items.remove(&scheduled.name);
                    self.order.retain(|n| n != &scheduled.name);
                    ldebug!(name = scheduled.name.as_str(), id = id.0, "item removed");
                    self.events.push(ListEvent::Removed { id });
                    out.removed += 1;
                }
                Transition::Settled => {
                    lwarn!(name = scheduled.name.as_str(), "timer fired for a settled item");
                }
            }
        }
        out
    }

    /// Recolors every settled item. `color_for(index, settled_count, name)` receives the index
    /// among settled items only; entering and exiting items keep their last color.
    ///
    /// Returns the number of items whose color changed.
    pub fn recolor(&mut self, mut color_for: impl FnMut(usize, usize, &str) -> Rgb) -> usize {
        let settled = self.settled_count();
        let mut index = 0;
        let mut changed = 0;
        for name in &self.order {
            let Some(item) = self.items.get_mut(name) else {
                continue;
            };
            if !item.transition.is_settled() {
                continue;
            }
            let color = color_for(index, settled, name);
            index += 1;
            if item.color != Some(color) {
                item.color = Some(color);
                self.events.push(ListEvent::Recolored { id: item.id, color });
                changed += 1;
            }
        }
        changed
    }

    /// Moves every item's transition start and deadline `delta_ms` later.
    pub fn shift(&mut self, delta_ms: u64) {
        for scheduled in &mut self.queue {
            scheduled.timer.due_ms = scheduled.timer.due_ms.saturating_add(delta_ms);
        }
        for item in self.items.values_mut() {
            item.since_ms = item.since_ms.saturating_add(delta_ms);
            if let Some(timer) = &mut item.timer {
                timer.due_ms = timer.due_ms.saturating_add(delta_ms);
            }
        }
    }

    /// Removes every item immediately, dropping all pending completions.
    pub fn clear(&mut self) {
        for name in mem::take(&mut self.order) {
            if let Some(item) = self.items.remove(&name) {
                self.events.push(ListEvent::Removed { id: item.id });
            }
        }
        self.items.clear();
        self.queue.clear();
    }
}
