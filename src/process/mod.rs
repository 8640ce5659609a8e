// src/process/mod.rs
pub mod extract;
pub mod mapping;
pub mod merge;
pub mod normalize;
pub mod raw_table;
pub mod utils;

use tracing::{debug, info};

use crate::schema::Record;
use mapping::map_row;
use merge::merge_rows;
use normalize::{normalize_row, strip_sequence_cell, NormalizedRow};
use raw_table::read_tables;

/// Turn the HTML fragments of one document into records, in document order.
///
/// - Every `<tbody>` row of every fragment is read, stripped of a sequence cell
///   and normalized to eight cells.
/// - Blank cells inherit from the rows above; the carry spans all tables.
/// - Each surviving row is mapped by its source width.
///
/// Bad rows are dropped; nothing here fails.
#[tracing::instrument(level = "info", skip_all, fields(fragments = fragments.len()))]
pub fn extract_records<S: AsRef<str>>(fragments: &[S]) -> Vec<Record> {
    let rows: Vec<NormalizedRow> = fragments
        .iter()
        .flat_map(|fragment| read_tables(fragment.as_ref()))
        .enumerate()
        .flat_map(|(idx, table)| {
            debug!(table = idx, rows = table.rows.len(), "read table");
            table.rows
        })
        .map(strip_sequence_cell)
        .map(normalize_row)
        .collect();
    let total = rows.len();

    let merged = merge_rows(rows);
    let records: Vec<Record> = merged.iter().filter_map(map_row).collect();

    info!(
        rows = total,
        merged = merged.len(),
        records = records.len(),
        "extracted records"
    );
    records
}

/// Formatted lines for `records`, one per record.
pub fn format_records(records: &[Record]) -> Vec<String> {
    records.iter().map(Record::to_string).collect()
}
