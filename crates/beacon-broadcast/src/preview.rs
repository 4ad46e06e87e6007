// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Template preview with personalisation filled in.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use beacon_core::Template;
use regex::{Captures, Regex};

/// `((name))`, where the name has no parentheses.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\(([^()]+)\)\)").expect("placeholder pattern is valid")
});

/// Placeholder names match case-insensitively and ignore surrounding spaces.
fn normalise(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A template rendered against a broadcast's personalisation.
#[derive(Debug, Clone)]
pub struct BroadcastPreview {
    template: Template,
    values: BTreeMap<String, String>,
}

impl BroadcastPreview {
    pub fn new(template: Template, personalisation: &BTreeMap<String, String>) -> Self {
        let values = personalisation
            .iter()
            .map(|(key, value)| (normalise(key), value.clone()))
            .collect();
        Self { template, values }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        PLACEHOLDER
            .captures_iter(&self.template.content)
            .map(|caps| caps[1].trim().to_string())
            .filter(|name| seen.insert(normalise(name)))
            .collect()
    }

    /// Placeholders with no personalisation value.
    pub fn missing(&self) -> Vec<String> {
        self.placeholders()
            .into_iter()
            .filter(|name| !self.values.contains_key(&normalise(name)))
            .collect()
    }

    /// Content with known placeholders replaced; unknown ones are left as written.
    pub fn render(&self) -> String {
        PLACEHOLDER
            .replace_all(&self.template.content, |caps: &Captures<'_>| {
                match self.values.get(&normalise(&caps[1])) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}
