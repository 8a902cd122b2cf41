// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::consts::{DEFAULT_TOP_N, DEFAULT_URL, SETTLE_MS, TIMEOUT_SECS};
use crate::config::options::{ExportFormat, ExportOptions, PageSource, ScrapeOptions, TrackerOptions};
use crate::data::PriceRecord;
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// Headless Chrome (renders scripts)
    Browser,
    /// Plain HTTP GET
    Http,
}

impl Default for SourceArg {
    fn default() -> Self {
        if cfg!(feature = "browser") { SourceArg::Browser } else { SourceArg::Http }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

/// Scrape the top of a cryptocurrency price listing into a CSV file
/// and print it as a table.
#[derive(Parser, Debug)]
#[command(name = "crypto_tracker", version)]
pub struct Args {
    /// Listing page to scrape
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Number of rows to read from the top of the listing
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub top: u64,

    /// Seconds to wait for the price rows to appear (also the HTTP timeout)
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Pause after rows appear, letting dynamic content settle
    #[arg(long = "settle-ms", default_value_t = SETTLE_MS)]
    pub settle_ms: u64,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Where to get the page from
    #[arg(long, value_enum, default_value_t = SourceArg::default())]
    pub source: SourceArg,

    /// Read a saved HTML page instead of fetching
    #[arg(long, value_name = "PATH", conflicts_with = "source")]
    pub html: Option<PathBuf>,

    /// Output file, or a directory for the default file name
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Omit the header line from the output file
    #[arg(long)]
    pub no_headers: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> TrackerOptions {
        let source = match (&self.html, self.source) {
            (Some(path), _) => PageSource::File(path.clone()),
            (None, SourceArg::Browser) => PageSource::Browser,
            (None, SourceArg::Http) => PageSource::Http,
        };

        let scrape = ScrapeOptions {
            url: self.url.clone(),
            source,
            top_n: self.top as usize,
            timeout: Duration::from_secs(self.timeout),
            settle: Duration::from_millis(self.settle_ms),
            headless: !self.headed,
            ..ScrapeOptions::default()
        };

        let mut export = ExportOptions::default();
        export.format = match self.format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        };
        export.include_headers = !self.no_headers;
        if let Some(p) = &self.out {
            export = export.with_path(p);
        }

        TrackerOptions { scrape, export }
    }
}

/// Prints per-row progress to the terminal.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, r: &PriceRecord) {
        println!("{}. {}: ${}", r.rank, r.name, r.price);
    }
    fn item_failed(&mut self, _rank: u32, reason: &str) {
        eprintln!("Skipped: {reason}");
    }
}

pub async fn run(args: &Args) -> Result<RunSummary> {
    let opts = args.to_options();
    let mut progress = ConsoleProgress;
    let mut stdout = std::io::stdout();
    runner::run(&opts, Some(&mut progress), &mut stdout).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("crypto_tracker").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_matches_defaults() {
        let opts = parse(&[]).to_options();
        assert_eq!(opts, TrackerOptions::default());
    }

    #[test]
    fn html_replay_overrides_source() {
        let opts = parse(&["--html", "saved.html", "-n", "3"]).to_options();
        assert_eq!(opts.scrape.source, PageSource::File(PathBuf::from("saved.html")));
        assert_eq!(opts.scrape.top_n, 3);
    }

    #[test]
    fn html_conflicts_with_explicit_source() {
        let argv = ["crypto_tracker", "--html", "x.html", "--source", "http"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn top_must_be_positive() {
        assert!(Args::try_parse_from(["crypto_tracker", "--top", "0"]).is_err());
    }

    #[test]
    fn export_flags() {
        let opts = parse(&["--format", "tsv", "--no-headers", "-o", "snap/", "--headed"]).to_options();
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(!opts.export.include_headers);
        assert_eq!(opts.export.out_path(), PathBuf::from("snap").join("crypto_data.tsv"));
        assert!(!opts.scrape.headless);
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }
}
