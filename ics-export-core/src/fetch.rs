//! Feed retrieval over HTTP.

use std::time::Duration;

use crate::error::{IcsExportError, IcsExportResult};

/// Applies to the whole request, connect through body.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Subscription links are often published with the webcal scheme, which is
/// plain HTTPS underneath.
fn normalize_url(url: &str) -> String {
    let url = url.trim();
    match url.strip_prefix("webcal://") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    }
}

/// Download the calendar text behind `url`.
///
/// Any transport failure or non-2xx status is a `Fetch` error. There is no
/// retry.
pub async fn fetch(url: &str) -> IcsExportResult<String> {
    let url = normalize_url(url);

    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    tracing::debug!(%url, "Fetching calendar feed");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| IcsExportError::Fetch(format!("{} ({})", e, url)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(IcsExportError::Fetch(format!(
            "Server responded with {} for {}",
            status, url
        )));
    }

    let body = response.text().await?;

    tracing::info!(bytes = body.len(), "Fetched calendar feed");

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webcal_scheme_becomes_https() {
        assert_eq!(
            normalize_url("webcal://example.com/cal.ics"),
            "https://example.com/cal.ics"
        );
    }

    #[test]
    fn other_urls_are_only_trimmed() {
        assert_eq!(
            normalize_url("  http://localhost:8080/feed.ics \n"),
            "http://localhost:8080/feed.ics"
        );
    }
}
