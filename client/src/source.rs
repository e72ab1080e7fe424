use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use pokegui_protocol::{PokemonResponse, TypeResponse, parse_pokemon, parse_type};
use reqwest::Url;

use crate::config::ClientConfig;

/// Where creature, type and sprite data comes from.
///
/// Every method fails for transport errors, non-success statuses and
/// malformed bodies alike; callers do not distinguish between them.
#[async_trait]
pub trait Source: Send + Sync {
    /// Creature by (already lowercased) name
    async fn pokemon(&self, name: &str) -> Result<PokemonResponse>;

    /// Type by name
    async fn type_info(&self, name: &str) -> Result<TypeResponse>;

    /// Raw sprite bytes at `url`
    async fn sprite(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`Source`] backed by the HTTP API
pub struct HttpSource {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder.build().context("Failed to build HTTP client")?;
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid base URL {}", config.base_url))?;

        Ok(Self { http, base_url })
    }

    /// `{base}/{resource}/{name}/` with `name` escaped as one path segment
    fn endpoint(&self, resource: &str, name: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Base URL cannot take a path: {}", self.base_url))?
            .pop_if_empty()
            .extend([resource, name, ""]);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response> {
        tracing::debug!(url = %url, "GET");

        self.http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Unsuccessful response from {}", url))
    }

    async fn get_text(&self, url: Url) -> Result<String> {
        self.get(url)
            .await?
            .text()
            .await
            .context("Failed to read response body")
    }
}

#[async_trait]
impl Source for HttpSource {
    async fn pokemon(&self, name: &str) -> Result<PokemonResponse> {
        let body = self.get_text(self.endpoint("pokemon", name)?).await?;
        parse_pokemon(&body).with_context(|| format!("Failed to parse creature {}", name))
    }

    async fn type_info(&self, name: &str) -> Result<TypeResponse> {
        let body = self.get_text(self.endpoint("type", name)?).await?;
        parse_type(&body).with_context(|| format!("Failed to parse type {}", name))
    }

    async fn sprite(&self, url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url).with_context(|| format!("Invalid sprite URL {}", url))?;
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .context("Failed to read sprite body")?;
        Ok(bytes.to_vec())
    }
}
