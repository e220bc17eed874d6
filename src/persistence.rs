// File: src/persistence.rs
//! Moving a `FrequencyTable` between memory and disk.
//!
//! Three formats are handled here:
//! - item lists: one raw item name per line, the program's input;
//! - backups: `"<name>: <count>"` per line, written after every load;
//! - snapshots: a bincode image of the whole table, written atomically.
//!
//! File handles live only for the duration of a single call and are closed
//! on every return path.

use crate::core::normalize::normalize_item;
use crate::core::render::format_record;
use crate::core::table::FrequencyTable;
use crate::core::types::ItemCount;
use crate::error::{GrocerError, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Builds a table from an item list, one name per line.
///
/// Lines are trimmed of ASCII whitespace and blank lines are skipped. An
/// empty file gives an empty table.
pub fn load_from_source(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|source| GrocerError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_items(BufReader::new(file), path)
}

/// Reads an item list from any buffered reader. `path` is only used to name
/// the source in errors.
pub fn read_items<R: BufRead>(reader: R, path: &Path) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    let mut lines_read = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|source| GrocerError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        lines_read += 1;
        if let Some(name) = normalize_item(&line) {
            table.add_item(name);
        }
    }
    debug!(
        "loaded {} lines ({} distinct items) from {}",
        lines_read,
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Writes the backup file, creating or truncating it.
///
/// On `WriteFailure` the file may hold a partial backup; nothing is rolled
/// back.
pub fn save_to_sink(table: &FrequencyTable, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| GrocerError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    write_entries(table, BufWriter::new(file), path)
}

/// Writes every entry as `"<name>: <count>\n"` in ascending name order,
/// then flushes.
pub fn write_entries<W: Write>(table: &FrequencyTable, mut writer: W, path: &Path) -> Result<()> {
    let write_failure = |source| GrocerError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };
    for entry in table.entries() {
        writeln!(writer, "{}", format_record(entry)).map_err(write_failure)?;
    }
    writer.flush().map_err(write_failure)?;
    debug!("wrote {} entries to {}", table.len(), path.display());
    Ok(())
}

/// Restores a table from a backup written by `save_to_sink`.
pub fn load_backup(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|source| GrocerError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut table = FrequencyTable::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| GrocerError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        if normalize_item(&line).is_none() {
            continue;
        }
        let (name, count) = parse_record(&line).ok_or_else(|| GrocerError::MalformedRecord {
            path: path.to_path_buf(),
            line_number: index + 1,
            line: line.clone(),
        })?;
        table.set_count(name, count);
    }
    debug!("restored {} entries from backup {}", table.len(), path.display());
    Ok(table)
}

// Names may themselves contain ": ", so split on the last one.
fn parse_record(line: &str) -> Option<(&str, ItemCount)> {
    let (name, count) = line.rsplit_once(": ")?;
    let count: ItemCount = count.trim_end().parse().ok()?;
    if name.is_empty() || count == 0 {
        return None;
    }
    Some((name, count))
}

/// Writes a bincode snapshot of the table through a temporary file in the
/// destination directory, then renames it into place.
pub fn save_snapshot(table: &FrequencyTable, path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let sink_unavailable = |source| GrocerError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    };
    fs::create_dir_all(parent_dir).map_err(sink_unavailable)?;
    let temp_file = NamedTempFile::new_in(parent_dir).map_err(sink_unavailable)?;

    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, table).map_err(|source| GrocerError::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(|source| GrocerError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })?;
    }

    temp_file
        .persist(path)
        .map_err(|e| GrocerError::WriteFailure {
            path: path.to_path_buf(),
            source: e.error,
        })?;
    debug!("snapshot of {} entries saved to {}", table.len(), path.display());
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|source| GrocerError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let table: FrequencyTable =
        bincode::deserialize_from(BufReader::new(file)).map_err(|source| GrocerError::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(table)
}
