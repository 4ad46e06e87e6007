// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Insertion-ordered set of raw area ids held by a broadcast message.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Raw area ids in first-insertion order, without duplicates.
///
/// Serialized as a plain JSON list. Deserializing a list with repeated ids
/// keeps the first occurrence of each.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AreaSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl AreaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.index.contains(&id) {
            return false;
        }
        self.index.insert(id.clone());
        self.order.push(id);
        true
    }

    /// Removes `id`, keeping the order of the rest. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.index.remove(id) {
            return false;
        }
        self.order.retain(|existing| existing != id);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// Existing ids followed by any new ids not already present.
    pub fn union<I, S>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut merged = self.clone();
        merged.extend(ids);
        merged
    }

    /// A copy with `id` removed.
    pub fn without(&self, id: &str) -> Self {
        let mut remaining = self.clone();
        remaining.remove(id);
        remaining
    }
}

impl PartialEq for AreaSet {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for AreaSet {}

impl<S: Into<String>> Extend<S> for AreaSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for AreaSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl From<Vec<String>> for AreaSet {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<AreaSet> for Vec<String> {
    fn from(set: AreaSet) -> Self {
        set.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_keeps_existing_order_and_skips_duplicates() {
        let set: AreaSet = ["wd20-B", "wd20-A"].into_iter().collect();
        let merged = set.union(["wd20-A", "wd20-C", "wd20-B", "wd20-D"]);
        assert_eq!(merged.as_slice(), ["wd20-B", "wd20-A", "wd20-C", "wd20-D"]);
        // Source untouched.
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn without_removes_only_the_given_id() {
        let set: AreaSet = ["a", "b", "c"].into_iter().collect();
        assert_eq!(set.without("b").as_slice(), ["a", "c"]);
        assert_eq!(set.without("zzz"), set);
    }

    #[test]
    fn deserializing_duplicates_keeps_first_occurrence() {
        let set: AreaSet = serde_json::from_str(r#"["x","y","x","z","y"]"#).unwrap();
        assert_eq!(set.as_slice(), ["x", "y", "z"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["x","y","z"]"#);
    }

    #[test]
    fn remove_then_insert_appends_at_end() {
        let mut set: AreaSet = ["a", "b"].into_iter().collect();
        assert!(set.remove("a"));
        assert!(!set.remove("a"));
        assert!(set.insert("a"));
        assert_eq!(set.as_slice(), ["b", "a"]);
    }
}
