// src/scrape.rs
use tracing::{debug, warn};

use crate::{
    config::consts::{ROW_SELECTOR, TIMESTAMP_FMT},
    config::options::{PageSource, ScrapeOptions},
    core::net,
    data::PriceRecord,
    error::{Result, TrackerError},
    progress::Progress,
    specs::listing,
};

/// Fetch the listing page HTML from the configured source.
pub async fn fetch_listing(opts: &ScrapeOptions) -> Result<String> {
    match &opts.source {
        PageSource::Browser => render_in_browser(opts).await,
        PageSource::Http => net::http_get(opts).await,
        PageSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
    }
}

#[cfg(feature = "browser")]
async fn render_in_browser(opts: &ScrapeOptions) -> Result<String> {
    use crate::core::browser::BrowserSession;

    let session = BrowserSession::launch(opts).await?;
    let html = session
        .render(&opts.url, ROW_SELECTOR, opts.timeout, opts.settle)
        .await;
    session.close().await;
    html
}

#[cfg(not(feature = "browser"))]
async fn render_in_browser(_opts: &ScrapeOptions) -> Result<String> {
    Err(TrackerError::Config(format!(
        "built without the `browser` feature; cannot wait for `{ROW_SELECTOR}`, use --source http"
    )))
}

/// Turn an already-fetched document into records, reporting each row.
/// Row failures are skipped; the caller decides what an empty result means.
pub fn extract_prices(
    doc: &str,
    top_n: usize,
    timestamp: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<PriceRecord> {
    let rows = listing::listing_rows(doc, top_n);
    debug!(rows = rows.len(), top_n, "listing rows located");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.len());
    }

    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        match listing::to_record(row, timestamp) {
            Ok(rec) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&rec);
                }
                records.push(rec);
            }
            Err(e) => {
                warn!("{e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(row.rank, &e.to_string());
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    records
}

/// Fetch, then extract. Fails when the page yields no records at all.
pub async fn collect_prices(
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<PriceRecord>> {
    let target = opts.source.describe(&opts.url).into_owned();
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Connecting to {target}"));
    }

    let doc = fetch_listing(opts).await?;
    let timestamp = chrono::Local::now().format(TIMESTAMP_FMT).to_string();

    let records = extract_prices(&doc, opts.top_n, &timestamp, progress);
    if records.is_empty() {
        return Err(TrackerError::NoRows(target));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        total: Option<usize>,
        done: Vec<u32>,
        failed: Vec<u32>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.total = Some(total); }
        fn item_done(&mut self, r: &PriceRecord) { self.done.push(r.rank); }
        fn item_failed(&mut self, rank: u32, _: &str) { self.failed.push(rank); }
        fn finish(&mut self) { self.finished = true; }
    }

    const DOC: &str = "<table><tbody>\
        <tr><td>s</td><td>1</td><td>Bitcoin</td><td>$10</td></tr>\
        <tr></tr>\
        <tr><td>s</td><td>3</td><td>Ethereum</td><td>$5</td></tr>\
        <tr><td>s</td><td>4</td><td>Tether</td><td>$1</td></tr>\
        </tbody></table>";

    #[test]
    fn failed_rows_are_skipped_and_reported() {
        let mut rec = Recorder::default();
        let out = extract_prices(DOC, 3, "t", Some(&mut rec));
        assert_eq!(out.len(), 2);
        assert_eq!(rec.total, Some(3));
        assert_eq!(rec.done, vec![1, 3]);
        assert_eq!(rec.failed, vec![2]);
        assert!(rec.finished);
    }

    #[test]
    fn works_without_progress() {
        let out = extract_prices(DOC, 10, "t", None);
        let names: Vec<&str> = out.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bitcoin", "Ethereum", "Tether"]);
    }

    #[tokio::test]
    async fn empty_page_is_no_rows() {
        let dir = std::env::temp_dir().join("crypto_tracker_scrape_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let page = dir.join("empty.html");
        std::fs::write(&page, "<html><body>maintenance</body></html>").unwrap();

        let opts = ScrapeOptions { source: PageSource::File(page), ..Default::default() };
        match collect_prices(&opts, None).await {
            Err(TrackerError::NoRows(target)) => assert!(target.ends_with("empty.html")),
            other => panic!("expected NoRows, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let opts = ScrapeOptions {
            source: PageSource::File("/nonexistent/crypto_tracker/page.html".into()),
            ..Default::default()
        };
        assert!(matches!(collect_prices(&opts, None).await, Err(TrackerError::Io(_))));
    }
}
