//! HTTP fetcher
//!
//! A thin GET-and-validate wrapper around `reqwest`: transport failures map
//! to [`ScrapeError::Connection`], any status other than 200 to
//! [`ScrapeError::NonOkStatus`]. No retries; a failed request is terminal
//! for the page being fetched.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::{Result, ScrapeError};

/// Builds the HTTP client used for all page fetches
///
/// # Errors
///
/// Returns the underlying `reqwest::Error` when the client cannot be
/// constructed (e.g. invalid TLS configuration).
pub fn build_http_client(user_agent: &str) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Makes an HTTP GET request and returns the response body as text
///
/// # Errors
///
/// * [`ScrapeError::Connection`] on transport failure
/// * [`ScrapeError::NonOkStatus`] when the response status is not 200
pub async fn get_html(client: &Client, url: &str) -> Result<String> {
    let response = send_get(client, url).await?;

    response.text().await.map_err(|source| ScrapeError::Connection {
        url: url.to_owned(),
        source,
    })
}

/// Makes an HTTP GET request and decodes the response body as JSON
///
/// # Errors
///
/// * [`ScrapeError::Connection`] on transport failure
/// * [`ScrapeError::NonOkStatus`] when the response status is not 200
/// * [`ScrapeError::JsonDecode`] when the body is not valid JSON
pub async fn get_json(client: &Client, url: &str) -> Result<serde_json::Value> {
    let response = send_get(client, url).await?;

    response
        .json()
        .await
        .map_err(|source| ScrapeError::JsonDecode {
            url: url.to_owned(),
            source,
        })
}

async fn send_get(client: &Client, url: &str) -> Result<reqwest::Response> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Connection {
            url: url.to_owned(),
            source,
        })?;

    validate_status(url, &response)?;

    Ok(response)
}

/// Rejects every status other than 200, logging the offender
fn validate_status(url: &str, response: &reqwest::Response) -> Result<()> {
    let status = response.status();

    if status != StatusCode::OK {
        tracing::error!("request made to {url} returned {status}");
        return Err(ScrapeError::NonOkStatus {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }

    Ok(())
}
