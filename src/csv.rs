// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::data::DataSet;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
///
/// Read-back counterpart of [`write_dataset`]: loads a previous export
/// (`sep` = [`ExportFormat::delim`](crate::config::options::ExportFormat::delim))
/// into rows of fields, header row included when it was written.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stream a dataset: optional header line, then rows in order.
pub fn write_dataset<W: Write>(mut w: W, ds: &DataSet, include_headers: bool, sep: char) -> io::Result<()> {
    if include_headers {
        if let Some(h) = &ds.headers {
            write_row(&mut w, h, sep)?;
        }
    }
    for r in &ds.rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

/// Whole export as a string (same bytes `write_dataset` would produce).
pub fn to_export_string(ds: &DataSet, include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_dataset(&mut buf, ds, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row(&["Bitcoin", "1,2", "say \"hi\""]), ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Bitcoin,\"1,2\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tab_separator_leaves_commas_alone() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row(&["a,b", "c"]), '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\tc\n");
    }

    #[test]
    fn headers_are_optional() {
        let ds = DataSet { headers: Some(row(&["Name", "Price"])), rows: vec![row(&["BTC", "1"])] };
        assert_eq!(to_export_string(&ds, true, ','), "Name,Price\nBTC,1\n");
        assert_eq!(to_export_string(&ds, false, ','), "BTC,1\n");
    }

    #[test]
    fn parse_reads_back_quoted_fields() {
        let rows = parse_rows("a,\"b,\"\"c\"\"\"\r\n\r\nd,e", ',');
        assert_eq!(rows, vec![row(&["a", "b,\"c\""]), row(&["d", "e"])]);
    }

    #[test]
    fn export_reads_back_as_written() {
        let ds = DataSet {
            headers: Some(row(&["Name", "Market Cap"])),
            rows: vec![row(&["Wrapped \"BTC\"", "1,000"]), row(&["Tab\tCoin", "N/A"])],
        };
        for sep in [',', '\t'] {
            let text = to_export_string(&ds, true, sep);
            let mut rows = parse_rows(&text, sep);
            assert_eq!(Some(rows.remove(0)), ds.headers);
            assert_eq!(rows, ds.rows);
        }
    }
}
