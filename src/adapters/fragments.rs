use crate::domain::ports::FragmentSource;
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use url::Url;

/// Fragments served over HTTP next to the page, `<base>/<name>.html`.
#[derive(Debug, Clone)]
pub struct HttpFragments {
    base_url: Url,
    client: Client,
}

impl HttpFragments {
    pub fn new(base_url: &str) -> Result<Self> {
        // a trailing slash makes `join` append instead of replacing the last segment
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Ok(Self {
            base_url: Url::parse(&base)?,
            client: Client::new(),
        })
    }
}

#[async_trait]
impl FragmentSource for HttpFragments {
    async fn fetch_fragment(&self, file: &str) -> Result<String> {
        let url = self.base_url.join(file)?;
        tracing::debug!("Fetching fragment: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::FragmentError {
                fragment: file.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        Ok(response.text().await?)
    }
}

/// Fragments read from a local directory.
#[derive(Debug, Clone)]
pub struct LocalFragments {
    base_path: PathBuf,
}

impl LocalFragments {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

#[async_trait]
impl FragmentSource for LocalFragments {
    async fn fetch_fragment(&self, file: &str) -> Result<String> {
        let full_path = self.base_path.join(file);
        tracing::debug!("Reading fragment: {}", full_path.display());

        tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|e| ScoutError::FragmentError {
                fragment: file.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl FragmentSource for Box<dyn FragmentSource> {
    async fn fetch_fragment(&self, file: &str) -> Result<String> {
        (**self).fetch_fragment(file).await
    }
}

/// Picks an HTTP source for `http(s)://` locations, a directory otherwise.
pub fn fragment_source(location: &str) -> Result<Box<dyn FragmentSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpFragments::new(location)?))
    } else {
        Ok(Box::new(LocalFragments::new(location)))
    }
}
