// src/core/normalize.rs

/// The whitespace class stripped from item names: space, tab, line feed,
/// carriage return, form feed and vertical tab. Unicode spaces are kept.
const ITEM_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// Normalize a raw input line to an item name.
///
/// Trims ASCII whitespace from both ends. Case is preserved, so `"Apples"`
/// and `"apples"` remain distinct items. Returns `None` when nothing is left.
pub fn normalize_item(raw: &str) -> Option<&str> {
    let trimmed = raw.trim_matches(&ITEM_WHITESPACE[..]);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_ascii_whitespace() {
        assert_eq!(normalize_item("  apple  "), Some("apple"));
        assert_eq!(normalize_item("\tbanana\t"), Some("banana"));
        assert_eq!(normalize_item("cherry\r\n"), Some("cherry"));
        assert_eq!(normalize_item("\x0b\x0cdates\x0c"), Some("dates"));
    }

    #[test]
    fn keeps_inner_whitespace_and_case() {
        assert_eq!(normalize_item(" Green  Beans "), Some("Green  Beans"));
        assert_eq!(normalize_item("LEEKS"), Some("LEEKS"));
    }

    #[test]
    fn blank_lines_yield_nothing() {
        assert_eq!(normalize_item(""), None);
        assert_eq!(normalize_item(" \t\r\n\x0b\x0c"), None);
    }

    #[test]
    fn unicode_spaces_are_not_trimmed() {
        assert_eq!(normalize_item("\u{a0}figs"), Some("\u{a0}figs"));
    }
}
