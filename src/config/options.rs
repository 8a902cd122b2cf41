// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::file::looks_like_dir_hint;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TrackerOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Where the listing HTML comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSource {
    /// Headless Chrome over CDP; sees the page after scripts have run.
    Browser,
    /// Plain GET; only what the server renders.
    Http,
    /// Saved HTML document.
    File(PathBuf),
}

impl PageSource {
    /// What to tell the user we are "connecting to".
    pub fn describe<'a>(&'a self, url: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            PageSource::File(p) => p.to_string_lossy(),
            _ => url.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub source: PageSource,
    pub top_n: usize,
    pub timeout: Duration,
    pub settle: Duration,
    pub headless: bool,
    pub user_agent: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            source: if cfg!(feature = "browser") { PageSource::Browser } else { PageSource::Http },
            top_n: DEFAULT_TOP_N,
            timeout: Duration::from_secs(TIMEOUT_SECS),
            settle: Duration::from_millis(SETTLE_MS),
            headless: true,
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out: Option<PathBuf>, // None: default file in the working directory
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out: None,
        }
    }
}

impl ExportOptions {
    /// Default file name for the current format, e.g. `crypto_data.csv`.
    pub fn default_file_name(&self) -> String {
        join!(DEFAULT_FILE, ".", self.format.ext())
    }

    /// Final file path. A directory (existing, or hinted by a trailing
    /// separator) gets the default file name appended.
    /// A user-supplied file name keeps its own extension.
    pub fn out_path(&self) -> PathBuf {
        match &self.out {
            None => PathBuf::from(self.default_file_name()),
            Some(p) if looks_like_dir_hint(p) || p.is_dir() => p.join(self.default_file_name()),
            Some(p) => p.clone(),
        }
    }

    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out = if s.is_empty() { None } else { Some(PathBuf::from(s)) };
    }

    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.out = Some(path.as_ref().to_path_buf());
        self
    }
}
