use crate::config::ScraperConfig;
use crate::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Source of box-score pages
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the HTML body at `url`
    async fn fetch_page(&self, url: &str) -> std::result::Result<String, FetchError>;
}

#[async_trait]
impl<'a, T: PageSource + ?Sized> PageSource for &'a T {
    async fn fetch_page(&self, url: &str) -> std::result::Result<String, FetchError> {
        (**self).fetch_page(url).await
    }
}

/// Live HTTP source; one pooled client reused for every request
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(client))
    }

    /// Wrap an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> std::result::Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status));
        }

        let html = response.text().await?;
        debug!("Fetched {} ({} bytes)", url, html.len());
        Ok(html)
    }
}
