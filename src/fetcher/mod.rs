use std::time::Duration;

use anyhow::anyhow;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::ProxyConfig;

/// Client for the CORS-style content-fetch proxy. The target URL is
/// percent-encoded into the proxy's `url` query parameter and the proxy
/// answers with `{ "contents": "<raw html>" }`.
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ProxyResponse {
    #[serde(default)]
    contents: Option<String>,
}

impl ProxyClient {
    pub fn new(config: &ProxyConfig) -> anyhow::Result<Self> {
        let mut timeout = config.request_timeout_secs;
        if timeout == 0 {
            timeout = 15;
        }

        let client = Client::builder()
            .user_agent("TagscopeAnalyzer/0.1")
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the raw HTML of `target` through the proxy. One request, no
    /// retries, no caching.
    pub async fn fetch_page(&self, target: &str) -> anyhow::Result<String> {
        let request_url = Url::parse_with_params(&self.base_url, &[("url", target)])?;

        tracing::debug!(target, "fetching page through proxy");

        let response = self.client.get(request_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("proxy returned status {status}"));
        }

        let body: ProxyResponse = response.json().await?;
        contents_from(body)
    }
}

fn contents_from(body: ProxyResponse) -> anyhow::Result<String> {
    body.contents
        .ok_or_else(|| anyhow!("proxy response missing contents field"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_body_with_contents() {
        let body: ProxyResponse = serde_json::from_str(r#"{"contents": "<html></html>"}"#).unwrap();
        assert_eq!(contents_from(body).unwrap(), "<html></html>");
    }

    #[test]
    fn rejects_body_without_contents() {
        let body: ProxyResponse = serde_json::from_str("{}").unwrap();
        let err = contents_from(body).unwrap_err();
        assert!(err.to_string().contains("missing contents"));
    }

    #[test]
    fn ignores_extra_proxy_fields() {
        // allorigins wraps the payload with a status object.
        let body: ProxyResponse = serde_json::from_str(
            r#"{"contents": "<html></html>", "status": {"http_code": 200}}"#,
        )
        .unwrap();
        assert_eq!(contents_from(body).unwrap(), "<html></html>");
    }

    #[test]
    fn rejects_non_string_contents() {
        assert!(serde_json::from_str::<ProxyResponse>(r#"{"contents": 42}"#).is_err());
    }
}
