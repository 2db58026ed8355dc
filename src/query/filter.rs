use std::collections::BTreeMap;

/// Filter values that mean "no constraint" and are dropped from requests.
const SENTINELS: &[&str] = &["", "All"];

/// A set of named filters applied to a collection request.
///
/// Keys are domain-specific (`category`, `source`, `type`, `pinned`, ...).
/// A value equal to a sentinel (`""` or `"All"`) deactivates the filter:
/// it is kept in the set for UI round-tripping but never serialized into
/// an outgoing request.
///
/// Backed by a `BTreeMap` so iteration order, and therefore the serialized
/// query string, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    values: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter value, replacing any previous value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether a value deactivates its filter.
    pub fn is_sentinel(value: &str) -> bool {
        SENTINELS.contains(&value)
    }

    /// Iterate over the filters that actually constrain the request,
    /// in deterministic (sorted-by-name) order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !Self::is_sentinel(v))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when no filter constrains the request.
    pub fn is_unconstrained(&self) -> bool {
        self.active().next().is_none()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
