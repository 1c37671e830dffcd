use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use reqwest::Url;

const WEBHOOK_BASE_URL: &str = "https://discord.com/api/webhooks/";

/// Builds the execution URL of the webhook with the given id and token.
pub fn webhook_url(id: u64, token: &str) -> Result<Url> {
    webhook_token(token)?;
    let url = format!("{WEBHOOK_BASE_URL}{id}/{token}");
    Url::parse(&url).with_context(|| format!("Could not parse URL {url:?}"))
}

pub fn webhook_token(token: &str) -> Result<()> {
    const CHARS: &[u8; 65] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.";
    validate_charset("Webhook Token", token, CHARS)
}

fn validate_charset(description: &'static str, string: &str, charset: &'static [u8]) -> Result<()> {
    if string.is_empty() {
        bail!("{description} is empty");
    }
    if string.bytes().all(|b| charset.contains(&b)) {
        return Ok(());
    }

    let set = string
        .bytes()
        .filter(|b| !charset.contains(b))
        .map(char::from)
        .collect::<HashSet<char>>();
    bail!("{description} contains invalid characters: {set:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_execution_url() {
        let url = webhook_url(1234, "abc_DEF-9.x").unwrap();
        assert_eq!(
            url.as_str(),
            "https://discord.com/api/webhooks/1234/abc_DEF-9.x"
        );
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!(webhook_url(1, "").is_err());
        let err = webhook_url(1, "abc/../x?y").unwrap_err();
        assert!(err.to_string().contains("invalid characters"));
    }
}
