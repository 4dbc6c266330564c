use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::model::{ApiResponse, RawRecipe, RawSearchResult, RecipeData, SearchData};
use crate::upload::NewRecipe;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Where recipes come from
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn fetch_recipe(&self, id: &str) -> Result<RawRecipe>;

    async fn search_recipes(&self, query: &str) -> Result<Vec<RawSearchResult>>;

    async fn upload_recipe(&self, recipe: &NewRecipe) -> Result<RawRecipe>;
}

/// HTTP client for the forkify recipe API
pub struct ForkifyClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl ForkifyClient {
    pub fn new(api_url: impl Into<String>, api_key: Option<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            api_key,
            timeout_secs,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.api_url.clone(),
            config.api_key.clone(),
            config.timeout_secs,
        )
    }

    fn key_param(&self) -> Vec<(&'static str, String)> {
        self.api_key
            .iter()
            .map(|key| ("key", key.clone()))
            .collect()
    }

    /// Send the request and decode the JSON body, racing both against the timeout
    async fn send<T: DeserializeOwned + Send>(&self, request: RequestBuilder) -> Result<T> {
        let timeout = Duration::from_secs(self.timeout_secs);
        let exchange = async {
            let response = request.send().await?;
            let url = response.url().to_string();
            let status = response.status();
            let body = response.text().await?;
            debug!("{} answered {}", url, status);

            if !status.is_success() {
                error!("Failed to fetch data from {} Error Code = {}", url, status);
                return Err(AppError::Status {
                    url,
                    status: status.as_u16(),
                });
            }
            let payload: T = serde_json::from_str(&body)
                .map_err(|e| AppError::MalformedPayload(format!("{url}: {e}")))?;
            Ok::<T, AppError>(payload)
        };

        tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| AppError::Timeout(self.timeout_secs))?
    }
}

#[async_trait]
impl RecipeSource for ForkifyClient {
    async fn fetch_recipe(&self, id: &str) -> Result<RawRecipe> {
        let url = format!("{}{}", self.api_url, id);
        let request = self.client.get(url).query(&self.key_param());
        let response: ApiResponse<RecipeData> = self.send(request).await?;
        Ok(response.data.recipe)
    }

    async fn search_recipes(&self, query: &str) -> Result<Vec<RawSearchResult>> {
        let mut params = vec![("search", query.to_string())];
        params.extend(self.key_param());
        let request = self.client.get(&self.api_url).query(&params);
        let response: ApiResponse<SearchData> = self.send(request).await?;
        Ok(response.data.recipes)
    }

    async fn upload_recipe(&self, recipe: &NewRecipe) -> Result<RawRecipe> {
        let request = self
            .client
            .post(&self.api_url)
            .query(&self.key_param())
            .json(recipe);
        let response: ApiResponse<RecipeData> = self.send(request).await?;
        Ok(response.data.recipe)
    }
}
