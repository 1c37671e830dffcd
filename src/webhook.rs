use std::fmt;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{IntoUrl, StatusCode, Url};

use crate::{message::Message, validate};

pub const USER_AGENT_VALUE: &str = "discohook/1.0";

/// The endpoint answered with something other than `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    pub status: StatusCode,
    pub body: String,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Webhook server returned error status {}", self.status)?;
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServerError {}

/// A webhook endpoint together with the HTTP client used to reach it.
#[derive(Debug, Clone)]
pub struct Webhook {
    http_client: Client,
    url: Url,
}

impl Webhook {
    pub fn new(webhook_url: impl IntoUrl) -> Result<Self> {
        Self::with_client(Client::new(), webhook_url)
    }

    /// Uses a preconfigured client, e.g. one with a request timeout.
    pub fn with_client(http_client: Client, webhook_url: impl IntoUrl) -> Result<Self> {
        let url = webhook_url.into_url().context("Invalid WebHook URL")?;
        Ok(Self { http_client, url })
    }

    pub fn from_parts(id: u64, token: &str) -> Result<Self> {
        let url = validate::webhook_url(id, token).context("Invalid WebHook URL")?;
        Self::new(url)
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Posts the message to this webhook.
    ///
    /// # Errors
    /// See [`send_with`].
    pub fn execute(&self, message: &Message, wait: bool) -> Result<()> {
        post(&self.http_client, self.url.clone(), message, wait)
    }
}

/// Posts a message to the webhook at `url` using a default HTTP client.
///
/// # Errors
/// See [`send_with`].
pub fn send(url: &str, message: &Message, wait: bool) -> Result<()> {
    send_with(&Client::new(), url, message, wait)
}

/// Posts a message to the webhook at `url`.
///
/// With `wait` set, Discord only answers once the message has been created.
///
/// # Errors
/// Possible failure reasons:
/// * The message could not be serialized
/// * Malformed URL
/// * Error sending the HTTP request
/// * Response with a status other than 200, reported as a [`ServerError`]
pub fn send_with(client: &Client, url: &str, message: &Message, wait: bool) -> Result<()> {
    let url = Url::parse(url).with_context(|| format!("Invalid WebHook URL {url:?}"))?;
    post(client, url, message, wait)
}

fn post(client: &Client, url: Url, message: &Message, wait: bool) -> Result<()> {
    let body: Vec<u8> =
        serde_json::to_vec(message).context("Could not serialize webhook message")?;
    let url = request_url(url, wait);

    log::debug!("Sending webhook message to {}", redact(&url));
    let resp: Response = client
        .post(url.clone())
        .header(USER_AGENT, USER_AGENT_VALUE)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .with_context(|| format!("Could not send POST request to {}", redact(&url)))?;

    handle_response(resp)
}

/// Appends the `wait=true` query parameter if requested.
#[must_use]
pub fn request_url(mut url: Url, wait: bool) -> Url {
    if wait {
        url.query_pairs_mut().append_pair("wait", "true");
    }
    url
}

fn handle_response(response: Response) -> Result<()> {
    let status: StatusCode = response.status();
    if status == StatusCode::OK {
        return Ok(());
    }

    // Body is diagnostic only
    let body: String = response.text().unwrap_or_else(|err| {
        log::warn!("Could not read error response body: {err}");
        String::new()
    });
    log::warn!("Webhook request failed with status {status}");
    Err(ServerError { status, body }.into())
}

/// The last path segment of a webhook URL is its secret token.
fn redact(url: &Url) -> String {
    let mut url = url.clone();
    let segments: Option<Vec<String>> = url
        .path_segments()
        .map(|s| s.map(str::to_owned).collect());
    if let Some(mut segments) = segments
        && segments.len() > 1
        && let Ok(mut path) = url.path_segments_mut()
    {
        segments.pop();
        path.clear().extend(&segments).push("***");
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn wait_flag_is_appended() {
        let base = "https://discord.com/api/webhooks/1/tok";
        assert_eq!(
            request_url(url(base), true).as_str(),
            "https://discord.com/api/webhooks/1/tok?wait=true"
        );
    }

    #[test]
    fn no_wait_flag_leaves_url_unchanged() {
        let base = "https://discord.com/api/webhooks/1/tok";
        assert_eq!(request_url(url(base), false).as_str(), base);
    }

    #[test]
    fn wait_flag_joins_existing_query() {
        let base = "https://discord.com/api/webhooks/1/tok?thread_id=7";
        assert_eq!(
            request_url(url(base), true).as_str(),
            "https://discord.com/api/webhooks/1/tok?thread_id=7&wait=true"
        );
    }

    #[test]
    fn token_is_redacted_in_logs() {
        let redacted = redact(&url("https://discord.com/api/webhooks/1/secret?wait=true"));
        assert_eq!(redacted, "https://discord.com/api/webhooks/1/***?wait=true");
    }

    #[test]
    fn malformed_url_is_rejected_before_sending() {
        let err = send("not a url", &Message::new("hello"), false).unwrap_err();
        assert!(err.to_string().contains("Invalid WebHook URL"));
        assert!(err.downcast_ref::<ServerError>().is_none());
    }

    #[test]
    fn from_parts_builds_discord_url() {
        let webhook = Webhook::from_parts(42, "token").unwrap();
        assert_eq!(
            webhook.url().as_str(),
            "https://discord.com/api/webhooks/42/token"
        );
        assert!(Webhook::from_parts(42, "bad token").is_err());
    }

    #[test]
    fn server_error_display() {
        let err = ServerError {
            status: StatusCode::BAD_REQUEST,
            body: "{\"message\":\"Cannot send an empty message\"}".into(),
        };
        assert_eq!(
            err.to_string(),
            "Webhook server returned error status 400 Bad Request: {\"message\":\"Cannot send an empty message\"}"
        );
    }
}
