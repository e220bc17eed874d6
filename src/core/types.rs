// src/core/types.rs

/// Number of times an item name was seen. Always at least 1 for a stored entry.
pub type ItemCount = u32;

/// A single (name, count) pair borrowed from a `FrequencyTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub name: &'a str,
    pub count: ItemCount,
}

impl<'a> Entry<'a> {
    /// Display width of the name, in characters rather than bytes.
    pub fn name_width(&self) -> usize {
        self.name.chars().count()
    }
}
