use crate::process::utils::is_blank;

/// Every normalized row carries exactly this many cells.
pub const ROW_WIDTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub cells: [String; ROW_WIDTH],
    /// Content cells the row had before padding, capped at [`ROW_WIDTH`].
    pub source_width: usize,
}

/// OCR keeps or drops the leading "No." column at random. A first cell that is
/// all digits, or starts with `-`, is treated as that column and removed.
pub fn strip_sequence_cell(mut cells: Vec<String>) -> Vec<String> {
    let is_sequence = cells.first().is_some_and(|first| {
        let first = first.trim();
        first.starts_with('-')
            || (!is_blank(first) && first.chars().all(|c| c.is_ascii_digit()))
    });
    if is_sequence {
        cells.remove(0);
    }
    cells
}

/// Coerce a row to [`ROW_WIDTH`] cells. Short rows get empty cells in front so
/// the rightmost-anchored fields stay put; long rows lose their tail.
pub fn normalize_row(mut cells: Vec<String>) -> NormalizedRow {
    cells.truncate(ROW_WIDTH);
    let source_width = cells.len();

    let offset = ROW_WIDTH - source_width;
    let mut content = cells.into_iter();
    let cells = std::array::from_fn(|i| {
        if i < offset {
            String::new()
        } else {
            content.next().unwrap_or_default()
        }
    });

    NormalizedRow {
        cells,
        source_width,
    }
}
