use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::Feature;
use crate::key::NameMap;

/// What an `enable` call did to the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnableOutcome {
    /// First time this name was seen.
    Inserted,
    /// The feature was disabled and is enabled again, with a fresh timestamp.
    Reenabled,
    /// The feature was already enabled; only the provided fields were overwritten.
    Refreshed,
}

/// Feature records keyed by name.
///
/// Records are never removed: disabled features stay around so a later `enable` keeps their
/// display name and category.
#[derive(Clone, Debug, Default)]
pub struct FeatureRegistry {
    features: Vec<Feature>,
    index: NameMap<usize>,
    next_stamp: u64,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(&mut self) -> u64 {
        let stamp = self.next_stamp;
        self.next_stamp = self.next_stamp.saturating_add(1);
        stamp
    }

    /// Enables `name`, creating it if unseen.
    ///
    /// The timestamp is only refreshed on a disabled → enabled transition. `display_name` and
    /// `category`, when `Some`, overwrite the stored values in every case.
    pub fn enable(
        &mut self,
        name: &str,
        display_name: Option<&str>,
        category: Option<&str>,
    ) -> EnableOutcome {
        if let Some(&i) = self.index.get(name) {
            let outcome = if self.features[i].enabled {
                EnableOutcome::Refreshed
            } else {
                let stamp = self.stamp();
                let feature = &mut self.features[i];
                feature.enabled = true;
                feature.timestamp = stamp;
                EnableOutcome::Reenabled
            };
            let feature = &mut self.features[i];
            if let Some(display_name) = display_name {
                feature.display_name = display_name.to_string();
            }
            if let Some(category) = category {
                feature.category = Some(category.to_string());
            }
            return outcome;
        }

        let timestamp = self.stamp();
        self.index.insert(name.to_string(), self.features.len());
        self.features.push(Feature {
            name: name.to_string(),
            display_name: display_name.unwrap_or(name).to_string(),
            category: category.map(String::from),
            enabled: true,
            timestamp,
        });
        EnableOutcome::Inserted
    }

    /// Disables `name`. Returns `false` (and does nothing) if it is unknown or already disabled.
    pub fn disable(&mut self, name: &str) -> bool {
        match self.index.get(name) {
            Some(&i) if self.features[i].enabled => {
                self.features[i].enabled = false;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.index.get(name).map(|&i| &self.features[i])
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|f| f.enabled)
    }

    /// All records, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> + '_ {
        self.features.iter()
    }

    pub fn enabled(&self) -> impl Iterator<Item = &Feature> + '_ {
        self.features.iter().filter(|f| f.enabled)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
