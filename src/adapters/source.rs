use crate::domain::ports::TableSource;
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TableSource for LocalSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let data = tokio::fs::read(&self.path).await?;
        Ok(data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl TableSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("Data source response status: {}", status);
        if !status.is_success() {
            return Err(LookupError::SourceStatusError {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Picks the adapter from the configured location string.
#[derive(Debug, Clone)]
pub enum DataSource {
    Local(LocalSource),
    Http(HttpSource),
}

impl DataSource {
    pub fn from_location(location: &str, timeout: Duration) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(DataSource::Http(HttpSource::new(location, timeout)?))
        } else {
            Ok(DataSource::Local(LocalSource::new(location)))
        }
    }
}

#[async_trait]
impl TableSource for DataSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            DataSource::Local(source) => source.fetch().await,
            DataSource::Http(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            DataSource::Local(source) => source.describe(),
            DataSource::Http(source) => source.describe(),
        }
    }
}
