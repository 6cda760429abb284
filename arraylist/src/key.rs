use alloc::string::String;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Map keyed by feature name (or display text, for the width cache).
#[cfg(feature = "std")]
pub(crate) type NameMap<V> = HashMap<String, V>;
#[cfg(not(feature = "std"))]
pub(crate) type NameMap<V> = BTreeMap<String, V>;
