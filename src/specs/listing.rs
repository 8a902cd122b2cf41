// src/specs/listing.rs
//
// Price listing table: `<table> … <tbody><tr><td>…` in document order.
// A row's cells are its `<td>` and `<th>` blocks together, so a `<th scope=row>`
// rank cell keeps its column. Column names come from the `<thead>` row, or the
// first row made only of `<th>` when there is no `<thead>`; such all-`<th>` rows
// are headers, not listing rows.
//
// Field rules. A field whose column is named in the header row is read
// from that column only; otherwise a content heuristic picks the cell:
// - Name:       "Name" column; else first line of cell 3, or cell 2 on short rows
// - Price:      "Price" column; else first cell starting with '$'
// - 24h change: "24h %" column; else first short cell ending with '%'
//               (a down-caret marker in the cell makes the value negative)
// - Market cap: "Market Cap" column; else last cell starting with '$'

use tracing::trace;

use crate::config::consts::{MAX_CHANGE_LEN, NOT_AVAILABLE, UNKNOWN_PREFIX};
use crate::core::html::{self, any_tag_blocks, inner_after_open_tag, tag_blocks, text_lines};
use crate::core::sanitize::{dollar_amount, strip_percent};
use crate::data::PriceRecord;
use crate::error::{Result, TrackerError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub lines: Vec<String>,
    pub falling: bool,
    /// `<th>` rather than `<td>`.
    pub header: bool,
}

impl Cell {
    pub fn from_block(block: &str) -> Self {
        let lc = html::to_lower(block);
        Self {
            lines: text_lines(inner_after_open_tag(block)),
            falling: lc.contains("caret-down"),
            header: lc.starts_with("<th"),
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn first_line(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    fn is_money(&self) -> bool {
        self.first_line().starts_with('$')
    }

    fn is_short_percent(&self) -> bool {
        let t = self.text();
        t.ends_with('%') && t.chars().count() < MAX_CHANGE_LEN
    }
}

/// Column indices resolved from the table's `<th>` row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub price: Option<usize>,
    pub change_24h: Option<usize>,
    pub market_cap: Option<usize>,
}

impl ColumnMap {
    pub fn from_headers(headers: &[String]) -> Self {
        let mut map = Self::default();
        for (i, h) in headers.iter().enumerate() {
            let h = h.to_ascii_lowercase();
            if map.name.is_none() && h == "name" {
                map.name = Some(i);
            } else if map.price.is_none() && h == "price" {
                map.price = Some(i);
            } else if map.change_24h.is_none() && h.contains("24h") && h.contains('%') {
                map.change_24h = Some(i);
            } else if map.market_cap.is_none() && h.contains("market cap") {
                map.market_cap = Some(i);
            }
        }
        map
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    /// 1-based position among the selected rows.
    pub rank: u32,
    pub cells: Vec<Cell>,
    pub columns: ColumnMap,
}

/// `<td>` and `<th>` cells of one `<tr>`, in document order.
fn row_cells(tr: &str) -> Vec<Cell> {
    any_tag_blocks(inner_after_open_tag(tr), &["td", "th"])
        .map(Cell::from_block)
        .collect()
}

fn is_header_row(cells: &[Cell]) -> bool {
    !cells.is_empty() && cells.iter().all(|c| c.header)
}

/// First line of each cell of the table's header row.
fn header_texts(table: &str) -> Vec<String> {
    let scope = tag_blocks(table, "thead").next().unwrap_or(table);
    tag_blocks(scope, "tr")
        .map(row_cells)
        .find(|cells| is_header_row(cells))
        .map(|cells| cells.iter().map(|c| s!(c.first_line())).collect())
        .unwrap_or_default()
}

/// Up to `limit` body rows across all tables, in document order.
pub fn listing_rows(doc: &str, limit: usize) -> Vec<ListingRow> {
    let mut out = Vec::new();

    'tables: for table in tag_blocks(doc, "table") {
        let columns = ColumnMap::from_headers(&header_texts(table));
        trace!(?columns, "table columns");

        for tbody in tag_blocks(table, "tbody") {
            for tr in tag_blocks(inner_after_open_tag(tbody), "tr") {
                if out.len() >= limit {
                    break 'tables;
                }
                let cells = row_cells(tr);
                if is_header_row(&cells) {
                    continue;
                }
                out.push(ListingRow { rank: out.len() as u32 + 1, cells, columns });
            }
        }
    }
    out
}

/// The mapped column when there is one, the heuristic's pick otherwise.
fn column<'a>(
    row: &'a ListingRow,
    idx: Option<usize>,
    heuristic: impl FnOnce() -> Option<&'a Cell>,
) -> Option<&'a Cell> {
    match idx {
        Some(i) => row.cells.get(i).filter(|c| !c.lines.is_empty()),
        None => heuristic(),
    }
}

fn pick_name(row: &ListingRow) -> Option<String> {
    let cell = column(row, row.columns.name, || match row.cells.len() {
        n if n >= 3 => row.cells.get(2),
        2 => row.cells.get(1),
        _ => None,
    })?;
    Some(cell.first_line().to_string()).filter(|s| !s.is_empty())
}

fn pick_price(row: &ListingRow) -> Option<String> {
    let cell = column(row, row.columns.price, || row.cells.iter().find(|c| c.is_money()))?;
    dollar_amount(cell.first_line())
}

fn pick_change(row: &ListingRow) -> Option<String> {
    let cell = column(row, row.columns.change_24h, || {
        row.cells.iter().find(|c| c.is_short_percent())
    })?;
    let value = strip_percent(cell.first_line());
    if value.is_empty() {
        return None;
    }
    if cell.falling && !value.starts_with('-') {
        Some(join!("-", &value))
    } else {
        Some(value)
    }
}

fn pick_market_cap(row: &ListingRow) -> Option<String> {
    let cell = column(row, row.columns.market_cap, || {
        row.cells.iter().rev().find(|c| c.is_money())
    })?;
    dollar_amount(cell.first_line())
}

/// Shape one row. Rows without any cell are an error; everything else
/// yields a record with `N/A` / `Unknown-<rank>` fallbacks.
pub fn to_record(row: &ListingRow, timestamp: &str) -> Result<PriceRecord> {
    if row.cells.is_empty() {
        return Err(TrackerError::Row { rank: row.rank, reason: s!("no <td>/<th> cells") });
    }
    let na = || s!(NOT_AVAILABLE);

    Ok(PriceRecord {
        timestamp: s!(timestamp),
        rank: row.rank,
        name: pick_name(row).unwrap_or_else(|| format!("{UNKNOWN_PREFIX}{}", row.rank)),
        price: pick_price(row).unwrap_or_else(na),
        change_24h: pick_change(row).unwrap_or_else(na),
        market_cap: pick_market_cap(row).unwrap_or_else(na),
    })
}
