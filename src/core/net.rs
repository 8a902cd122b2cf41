// src/core/net.rs

// Plain HTTP GET. Sees only server-rendered markup; no scripts run.

use tracing::debug;

use crate::config::options::ScrapeOptions;
use crate::error::Result;

pub async fn http_get(opts: &ScrapeOptions) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(opts.user_agent.as_str())
        .timeout(opts.timeout)
        .build()?;

    let resp = client.get(&opts.url).send().await?.error_for_status()?;
    debug!(status = %resp.status(), url = %opts.url, "listing page fetched");
    Ok(resp.text().await?)
}
