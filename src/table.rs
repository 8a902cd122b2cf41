// src/table.rs

// GitHub-flavoured pipe table for the terminal:
//
// | Name     |   Price |
// |----------|---------|
// | Bitcoin  | 67123.4 |
//
// Columns are as wide as their widest cell. A column whose cells all parse
// as numbers is right-aligned, header included.

use std::fmt::Write;

use crate::data::DataSet;

fn width(s: &str) -> usize {
    s.chars().count()
}

fn is_numeric(rows: &[Vec<String>], col: usize) -> bool {
    !rows.is_empty()
        && rows.iter().all(|r| r.get(col).is_some_and(|c| c.trim().parse::<f64>().is_ok()))
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize], right: &[bool]) {
    out.push('|');
    for (i, &w) in widths.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        let _ = if right[i] {
            write!(out, " {cell:>w$} |")
        } else {
            write!(out, " {cell:<w$} |")
        };
    }
    out.push('\n');
}

pub fn render_table(ds: &DataSet) -> String {
    let header: Vec<&str> = ds.headers.iter().flatten().map(String::as_str).collect();
    let cols = ds.rows.iter().map(Vec::len).chain([header.len()]).max().unwrap_or(0);
    if cols == 0 {
        return s!();
    }

    let mut widths = vec![0usize; cols];
    for (i, h) in header.iter().enumerate() {
        widths[i] = width(h);
    }
    for row in &ds.rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(width(cell));
        }
    }
    let right: Vec<bool> = (0..cols).map(|c| is_numeric(&ds.rows, c)).collect();

    let mut out = s!();
    if !header.is_empty() {
        push_line(&mut out, &header, &widths, &right);
        out.push('|');
        for w in &widths {
            out.push_str(&"-".repeat(w + 2));
            out.push('|');
        }
        out.push('\n');
    }
    for row in &ds.rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&mut out, &cells, &widths, &right);
    }
    out
}
