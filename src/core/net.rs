// src/core/net.rs
//
// One blocking GET per run. No retries; a failed fetch is final.

use std::time::Duration;

use crate::config::options::HtmlOptions;
use crate::error::{Result, ScrapeError};

pub fn http_get(url: &str, opts: &HtmlOptions) -> Result<String> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(opts.timeout_secs)))
        .build()
        .into();

    logf!("Fetching {url}");
    let response = agent
        .get(url)
        .header("User-Agent", &opts.user_agent)
        .call()
        .map_err(|e| ScrapeError::unavailable(url, e))?;

    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| ScrapeError::unavailable(url, format!("reading body: {e}")))?;

    logd!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

pub fn looks_like_url(input: &str) -> bool {
    let lc = input.trim().to_ascii_lowercase();
    crate::config::consts::URL_SCHEMES.iter().any(|s| lc.starts_with(s))
}
