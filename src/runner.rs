// src/runner.rs
use std::io::Write;
use std::path::PathBuf;

use crate::{
    config::options::TrackerOptions,
    data::{DataSet, PriceRecord},
    error::Result,
    file, scrape,
    progress::Progress,
    table::render_table,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub records: Vec<PriceRecord>,
    pub file_written: PathBuf,
}

/// Scrape, print the table to `out`, then write the export file.
/// Nothing is written to disk unless at least one record was scraped.
pub async fn run<W: Write>(
    opts: &TrackerOptions,
    progress: Option<&mut dyn Progress>,
    out: &mut W,
) -> Result<RunSummary> {
    let records = scrape::collect_prices(&opts.scrape, progress).await?;
    let ds = DataSet::from_records(&records);

    writeln!(out, "\nTotal cryptocurrencies tracked: {}", records.len())?;
    writeln!(out, "\nCryptocurrency Data:\n")?;
    write!(out, "{}", render_table(&ds))?;

    let path = file::write_export(&opts.export, &ds)?;
    writeln!(out, "\nData saved to {}", path.display())?;
    out.flush()?;

    Ok(RunSummary { records, file_written: path })
}
