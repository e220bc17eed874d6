// src/core/render.rs
use crate::core::table::FrequencyTable;
use crate::core::types::Entry;

const BAR_SEPARATOR: &str = " | ";
const BAR_CHAR: char = '*';

/// `"<name>: <count>"`, the record format shared by the list view and the
/// backup file.
pub fn format_record(entry: Entry<'_>) -> String {
    format!("{}: {}", entry.name, entry.count)
}

/// One histogram row. The name is right-aligned to `width` columns.
pub fn format_bar(entry: Entry<'_>, width: usize) -> String {
    let padding = width.saturating_sub(entry.name_width());
    let count = entry.count as usize;
    let mut line = String::with_capacity(padding + entry.name.len() + BAR_SEPARATOR.len() + count);
    line.extend(std::iter::repeat(' ').take(padding));
    line.push_str(entry.name);
    line.push_str(BAR_SEPARATOR);
    line.extend(std::iter::repeat(BAR_CHAR).take(count));
    line
}

pub fn list_lines(table: &FrequencyTable) -> Vec<String> {
    table.entries().map(format_record).collect()
}

/// Rows are padded to the table's longest-name high-water mark, which may be
/// wider than any name still present after a removal.
pub fn histogram_lines(table: &FrequencyTable) -> Vec<String> {
    let width = table.longest_key_len();
    table.entries().map(|e| format_bar(e, width)).collect()
}

pub fn render_list(table: &FrequencyTable) -> String {
    join_lines(list_lines(table))
}

pub fn render_histogram(table: &FrequencyTable) -> String {
    join_lines(histogram_lines(table))
}

// Every line, including the last, ends in '\n'.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
