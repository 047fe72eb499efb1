//! HTTP provider for jService-compatible trivia APIs.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::{CategoryId, CategoryProvider, ProviderError, RawCategory, RawClue};
use crate::config::TriviaConfig;

/// Category listing entry: `GET /categories?count=N`.
#[derive(Debug, Deserialize)]
struct CategorySummary {
    id: u64,
}

/// Category detail: `GET /category?id=N`.
#[derive(Debug, Deserialize)]
struct CategoryDetail {
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default)]
    clues: Vec<ClueDetail>,
}

#[derive(Debug, Deserialize)]
struct ClueDetail {
    #[serde(default, deserialize_with = "null_as_empty")]
    question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    answer: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// REST client for a jService-style API.
#[derive(Debug, Clone)]
pub struct JServiceClient {
    base_url: String,
    category_pool_size: usize,
    client: reqwest::Client,
}

impl JServiceClient {
    /// Creates a client from the trivia configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the HTTP client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.api_base_url()))]
    pub fn from_config(config: &TriviaConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.request_timeout_secs()))
            .build()?;

        info!("Created jService client");
        Ok(Self {
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            category_pool_size: *config.category_pool_size(),
            client,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self))]
    async fn get_text(&self, url: &str) -> Result<String, ProviderError> {
        debug!("Sending GET request");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body_len = body.len(), "Got response");

        if !status.is_success() {
            warn!(status = %status, "Request rejected");
            return Err(ProviderError::new(format!("GET {} returned {}", url, status)));
        }

        Ok(body)
    }
}

#[async_trait::async_trait]
impl CategoryProvider for JServiceClient {
    #[instrument(skip(self), fields(count = self.category_pool_size))]
    async fn list_category_ids(&self) -> Result<Vec<CategoryId>, ProviderError> {
        let url = format!("{}/categories?count={}", self.base_url, self.category_pool_size);
        let body = self.get_text(&url).await?;
        let ids = parse_category_ids(&body)?;
        info!(category_count = ids.len(), "Listed categories");
        Ok(ids)
    }

    #[instrument(skip(self, id), fields(id = %id))]
    async fn get_category_clues(&self, id: CategoryId) -> Result<RawCategory, ProviderError> {
        let url = format!("{}/category?id={}", self.base_url, id);
        let body = self.get_text(&url).await?;
        let category = parse_category(&body)?;
        debug!(title = %category.title, clue_count = category.clues.len(), "Fetched category");
        Ok(category)
    }
}

/// Decodes a category listing into ids, keeping listing order.
fn parse_category_ids(body: &str) -> Result<Vec<CategoryId>, ProviderError> {
    let summaries: Vec<CategorySummary> = serde_json::from_str(body)
        .map_err(|e| ProviderError::new(format!("Failed to parse category list: {}", e)))?;
    Ok(summaries.into_iter().map(|s| CategoryId::new(s.id)).collect())
}

/// Decodes a category detail into its title and clue pool.
fn parse_category(body: &str) -> Result<RawCategory, ProviderError> {
    let detail: CategoryDetail = serde_json::from_str(body)
        .map_err(|e| ProviderError::new(format!("Failed to parse category: {}", e)))?;
    let clues = detail
        .clues
        .into_iter()
        .map(|c| RawClue::new(c.question, c.answer))
        .collect();
    Ok(RawCategory::new(detail.title, clues))
}
