//! Ordered color groups and the palette that holds them.
//!
//! Groups keep insertion order and merge with "later entry wins": an
//! overwritten key keeps its original position, new keys are appended. The
//! theme document sorts keys on output, so order only matters for diagnostics
//! and for anything that walks a group (wildcard checks, conversion).

use std::collections::BTreeMap;

use crate::color::ResolvedColor;

/// A named, ordered set of colors such as `ui` or `syntax`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorGroup {
    name: String,
    entries: Vec<(String, ResolvedColor)>,
}

impl ColorGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What: Set a color, replacing any existing value for `key` in place.
    ///
    /// Inputs:
    /// - `key`: Entry name within the group.
    /// - `color`: New value.
    ///
    /// Output:
    /// - The previous value when the key already existed.
    ///
    /// Details:
    /// - Replacing keeps the key's original position; new keys go last.
    pub fn insert(&mut self, key: impl Into<String>, color: ResolvedColor) -> Option<ResolvedColor> {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, color));
        }
        self.entries.push((key, color));
        None
    }

    /// Look up a color by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<ResolvedColor> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, color)| *color)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ResolvedColor)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// What: Merge another group into this one.
    ///
    /// Inputs:
    /// - `other`: Group whose entries win on conflict.
    ///
    /// Output:
    /// - The merged group, keeping this group's name.
    ///
    /// Details:
    /// - Same semantics as applying [`ColorGroup::insert`] for every entry of
    ///   `other` in order.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        for (key, color) in other.iter() {
            self.insert(key, color);
        }
        self
    }

    /// Entries keyed and ordered lexicographically, for stable serialization.
    #[must_use]
    pub fn sorted(&self) -> BTreeMap<String, ResolvedColor> {
        self.entries.iter().cloned().collect()
    }
}

/// All color groups of a theme source, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    groups: Vec<ColorGroup>,
}

impl Palette {
    /// Add a group, merging into an existing group of the same name.
    pub fn insert_group(&mut self, group: ColorGroup) {
        if let Some(existing) = self.groups.iter_mut().find(|g| g.name == group.name) {
            *existing = std::mem::take(existing).merge(&group);
        } else {
            self.groups.push(group);
        }
    }

    /// Groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[ColorGroup] {
        &self.groups
    }

    /// Find a group by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&ColorGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// What: Resolve a `group.key` reference.
    ///
    /// Inputs:
    /// - `reference`: Reference text; the group name ends at the first dot.
    ///
    /// Output:
    /// - The referenced color, or `None` when group or key is unknown.
    #[must_use]
    pub fn lookup(&self, reference: &str) -> Option<ResolvedColor> {
        let (group, key) = reference.split_once('.')?;
        self.group(group)?.get(key)
    }

    /// What: Expand a reference or `group.*` wildcard into labeled colors.
    ///
    /// Inputs:
    /// - `pattern`: `group.key` or `group.*`.
    ///
    /// Output:
    /// - `(label, color)` pairs in group order; `None` when nothing matches.
    #[must_use]
    pub fn expand(&self, pattern: &str) -> Option<Vec<(String, ResolvedColor)>> {
        if let Some(group) = pattern.strip_suffix(".*") {
            let group = self.group(group)?;
            return Some(
                group
                    .iter()
                    .map(|(key, color)| (format!("{}.{key}", group.name), color))
                    .collect(),
            );
        }
        self.lookup(pattern)
            .map(|color| vec![(pattern.to_string(), color)])
    }
}

/// Whether a value is a `group.key` reference rather than a color literal.
pub(crate) fn is_reference(value: &str) -> bool {
    let v = value.trim();
    v.contains('.')
        && !v.contains(['(', ',', '#'])
        && !v.chars().any(char::is_whitespace)
        && v.split_once('.').is_some_and(|(g, k)| !g.is_empty() && !k.is_empty())
}
