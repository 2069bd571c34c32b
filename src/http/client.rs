use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;

/// HTTP client preconfigured for the activity store's REST endpoint
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
}

impl StoreClient {
    pub fn new(user_agent: &str, timeout_secs: u64, api_key: Option<&str>) -> Result<Self> {
        let headers = Self::build_headers(api_key)?;
        let client = Self::build_client(user_agent, timeout_secs, headers)?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.client.get(url).send().await
    }

    fn build_headers(api_key: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(key) = api_key {
            let apikey = HeaderValue::from_str(key).context("API key is not a valid header value")?;
            let bearer = HeaderValue::from_str(&format!("Bearer {}", key))
                .context("API key is not a valid header value")?;
            headers.insert("apikey", apikey);
            headers.insert(AUTHORIZATION, bearer);
        }

        Ok(headers)
    }

    fn build_client(user_agent: &str, timeout_secs: u64, headers: HeaderMap) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")
    }
}
