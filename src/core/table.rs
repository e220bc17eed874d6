// --- File: src/core/table.rs
use crate::core::types::{Entry, ItemCount};
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An alphabetically ordered count of item names.
///
/// Names are stored exactly as given; callers are expected to normalize
/// them first (see `core::normalize`). The table also remembers the widest
/// name it has ever held so the histogram can align its bars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: BTreeMap<String, ItemCount>,
    /// High-water mark in characters. Never lowered by `remove_item`.
    longest_key_len: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `name`, inserting it with a count of 1
    /// if it was never seen.
    ///
    /// Empty names are not valid items. The loader never passes one, and
    /// the table ignores them so the `count >= 1` invariant holds for every
    /// stored key.
    pub fn add_item(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        match self.entries.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.entries.insert(name.to_owned(), 1);
                self.bump_longest(name);
            }
        }
        trace!("add_item {:?}", name);
    }

    /// Overwrites the count for `name`. A count of 0 removes the entry.
    /// Used when restoring a table from a saved backup.
    pub fn set_count(&mut self, name: &str, count: ItemCount) {
        if name.is_empty() {
            return;
        }
        if count == 0 {
            self.remove_item(name);
            return;
        }
        self.entries.insert(name.to_owned(), count);
        self.bump_longest(name);
    }

    /// Deletes the entry for `name`, if any. The longest-name width is kept
    /// as is, so histogram padding may stay wider than the remaining names.
    pub fn remove_item(&mut self, name: &str) {
        self.entries.remove(name);
    }

    /// The count for `name`, or 0 if it was never added.
    pub fn item_frequency(&self, name: &str) -> ItemCount {
        self.entries.get(name).copied().unwrap_or(0)
    }

    pub fn longest_key_len(&self) -> usize {
        self.longest_key_len
    }

    /// A fresh traversal in ascending name order on every call.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        self.entries.iter().map(|(name, &count)| Entry {
            name: name.as_str(),
            count,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every count, i.e. the number of item lines that were loaded.
    pub fn total_count(&self) -> u64 {
        self.entries.values().map(|&c| u64::from(c)).sum()
    }

    fn bump_longest(&mut self, name: &str) {
        self.longest_key_len = self.longest_key_len.max(name.chars().count());
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for name in iter {
            table.add_item(name);
        }
        table
    }
}
