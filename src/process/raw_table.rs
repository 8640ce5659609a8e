use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("table selector"));
static TBODY: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody").expect("tbody selector"));
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("tr selector"));
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("td selector"));

#[derive(Debug, Default)]
pub struct RawTable {
    /// Each body `<tr>`, as the stripped text of its `<td>` cells in order.
    pub rows: Vec<Vec<String>>,
}

/// Pull every table body out of one HTML fragment, in document order.
pub fn read_tables(fragment: &str) -> Vec<RawTable> {
    let doc = Html::parse_fragment(fragment);
    doc.select(&TABLE).filter_map(read_table).collect()
}

fn read_table(table: ElementRef<'_>) -> Option<RawTable> {
    let tbody = table.select(&TBODY).next()?;
    let rows: Vec<Vec<String>> = tbody
        .select(&TR)
        .map(|tr| tr.select(&TD).map(cell_text).collect::<Vec<_>>())
        .collect();
    Some(RawTable { rows })
}

/// Text nodes are trimmed individually and glued without a separator.
fn cell_text(td: ElementRef<'_>) -> String {
    td.text().map(str::trim).collect()
}
