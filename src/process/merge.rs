use tracing::debug;

use crate::process::normalize::{NormalizedRow, ROW_WIDTH};
use crate::process::utils::is_blank;

/// Positions that must hold a value after filling, whatever the layout.
const REQUIRED: [usize; 2] = [2, 3];

/// Last non-blank value seen at each column, across the whole document.
#[derive(Debug, Default, Clone)]
pub struct CarryForward {
    last: [String; ROW_WIDTH],
}

impl CarryForward {
    /// Fill blanks in `row` from the carried values and remember its own values.
    pub fn fill(&mut self, mut row: NormalizedRow) -> NormalizedRow {
        for (cell, last) in row.cells.iter_mut().zip(self.last.iter_mut()) {
            if is_blank(cell) {
                cell.clone_from(last);
            } else {
                last.clone_from(cell);
            }
        }
        row
    }
}

fn has_required(row: &NormalizedRow) -> bool {
    REQUIRED.iter().all(|&i| !is_blank(&row.cells[i]))
}

/// Simulate merged cells: blanks inherit the value above them. Rows still
/// missing a required field after filling are dropped.
pub fn merge_rows<I>(rows: I) -> Vec<NormalizedRow>
where
    I: IntoIterator<Item = NormalizedRow>,
{
    let (_, merged) = rows.into_iter().fold(
        (CarryForward::default(), Vec::new()),
        |(mut carry, mut out), row| {
            let row = carry.fill(row);
            if has_required(&row) {
                out.push(row);
            } else {
                debug!(cells = ?row.cells, "dropping row without required fields");
            }
            (carry, out)
        },
    );
    merged
}
