use alloc::string::ToString;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::key::NameMap;
use crate::{Feature, Placement};

/// Measured widths keyed by display text.
///
/// Valid for one font/font-size pair; call [`WidthCache::invalidate`] when either changes.
#[derive(Clone, Debug, Default)]
pub struct WidthCache {
    widths: NameMap<f32>,
}

impl WidthCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&mut self, text: &str, measure: impl FnOnce(&str) -> f32) -> f32 {
        if let Some(&w) = self.widths.get(text) {
            return w;
        }
        let w = measure(text);
        self.widths.insert(text.to_string(), w);
        w
    }

    pub fn invalidate(&mut self) {
        if !self.widths.is_empty() {
            ltrace!(entries = self.widths.len(), "WidthCache::invalidate");
        }
        self.widths.clear();
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Orders two ranked entries `(width, timestamp)`.
///
/// - `Top`: widest first, older first on equal width.
/// - `Bottom`: narrowest first, newer first on equal width.
///
/// This keeps the edge nearest the screen corner populated by the most stable entries.
pub fn compare(placement: Placement, a: (f32, u64), b: (f32, u64)) -> Ordering {
    match placement {
        Placement::Top => b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)),
        Placement::Bottom => a.0.total_cmp(&b.0).then(b.1.cmp(&a.1)),
    }
}

/// Ranks `features` (expected to be the enabled set) by measured display width, then recency.
///
/// `width` is called at most once per feature.
pub fn rank<'a>(
    features: impl IntoIterator<Item = &'a Feature>,
    placement: Placement,
    mut width: impl FnMut(&str) -> f32,
) -> Vec<&'a Feature> {
    let mut keyed: Vec<(f32, &'a Feature)> = features
        .into_iter()
        .map(|f| (width(&f.display_name), f))
        .collect();
    keyed.sort_by(|(wa, a), (wb, b)| {
        compare(placement, (*wa, a.timestamp), (*wb, b.timestamp)).then_with(|| a.name.cmp(&b.name))
    });
    keyed.into_iter().map(|(_, f)| f).collect()
}
