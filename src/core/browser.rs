// src/core/browser.rs

// Headless Chrome over CDP. One session per run: launch, render one page,
// close. `close` must run on every path, so callers hold the session and
// close it after `render` regardless of its outcome.

use std::time::{Duration, Instant};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::consts::{CHROME_ARGS, POLL_MS, WINDOW_H, WINDOW_W};
use crate::config::options::ScrapeOptions;
use crate::error::{Result, TrackerError};

fn browser_err(ctx: &str, e: impl std::fmt::Display) -> TrackerError {
    TrackerError::Browser(format!("{ctx}: {e}"))
}

pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    pub async fn launch(opts: &ScrapeOptions) -> Result<Self> {
        info!(headless = opts.headless, "starting browser");

        let mut builder = BrowserConfig::builder()
            .window_size(WINDOW_W, WINDOW_H)
            .arg(format!("--user-agent={}", opts.user_agent));
        for arg in CHROME_ARGS {
            builder = builder.arg(*arg);
        }
        if !opts.headless {
            builder = builder.with_head();
        }
        let config = builder.build().map_err(|e| browser_err("config", e))?;

        let (browser, mut events) = Browser::launch(config)
            .await
            .map_err(|e| browser_err("launch", e))?;

        // CDP messages only flow while the handler stream is polled.
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let Err(e) = event {
                    debug!("cdp handler: {e}");
                }
            }
        });

        Ok(Self { browser, handler })
    }

    /// Navigate to `url`, wait for `selector`, let the page settle, and
    /// return the rendered HTML.
    pub async fn render(
        &self,
        url: &str,
        selector: &str,
        timeout: Duration,
        settle: Duration,
    ) -> Result<String> {
        let page = self
            .browser
            .new_page(url)
            .await
            .map_err(|e| browser_err("navigate", e))?;

        wait_for_selector(&page, selector, timeout).await?;
        tokio::time::sleep(settle).await;

        page.content().await.map_err(|e| browser_err("read content", e))
    }

    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("browser close: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            debug!("browser wait: {e}");
        }
        self.handler.abort();
        info!("browser closed");
    }
}

async fn wait_for_selector(page: &Page, selector: &str, timeout: Duration) -> Result<()> {
    let start = Instant::now();
    loop {
        if page.find_element(selector).await.is_ok() {
            debug!(waited = ?start.elapsed(), "{selector} present");
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(TrackerError::Timeout { selector: s!(selector), waited: timeout });
        }
        tokio::time::sleep(Duration::from_millis(POLL_MS)).await;
    }
}
