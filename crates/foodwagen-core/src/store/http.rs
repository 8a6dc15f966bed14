//! HTTP Food Store
//!
//! Talks to the hosted REST collection with reqwest (browser fetch on wasm).

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::FoodStore;
use crate::config::ApiConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{FoodPayload, FoodRecord};

#[derive(Debug, Clone)]
pub struct HttpFoodStore {
    config: ApiConfig,
    client: Client,
}

impl HttpFoodStore {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn read_json<T: DeserializeOwned>(action: &str, response: Response) -> StoreResult<T> {
        let response = Self::check_status(action, response)?;
        response.json::<T>().await.map_err(|e| {
            log::error!("[store] {}: failed to parse response: {}", action, e);
            StoreError::Decode(e.to_string())
        })
    }

    fn check_status(action: &str, response: Response) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            log::error!("[store] {}: store responded {}", action, status);
            Err(StoreError::Status(status.as_u16()))
        }
    }

    fn network_error(action: &str, error: reqwest::Error) -> StoreError {
        log::error!("[store] {}: request failed: {}", action, error);
        StoreError::Network(error.to_string())
    }
}

impl Default for HttpFoodStore {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[async_trait(?Send)]
impl FoodStore for HttpFoodStore {
    async fn list(&self, name_filter: Option<&str>) -> StoreResult<Vec<FoodRecord>> {
        let url = self.config.collection_url(name_filter)?;
        log::debug!("[store] GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::network_error("list foods", e))?;
        Self::read_json("list foods", response).await
    }

    async fn create(&self, payload: &FoodPayload) -> StoreResult<FoodRecord> {
        let url = self.config.collection_url(None)?;
        log::debug!("[store] POST {} name={:?}", url, payload.name);
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| Self::network_error("add food", e))?;
        Self::read_json("add food", response).await
    }

    async fn update(&self, id: &str, payload: &FoodPayload) -> StoreResult<FoodRecord> {
        let url = self.config.record_url(id)?;
        log::debug!("[store] PUT {}", url);
        let response = self
            .client
            .put(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| Self::network_error("update food", e))?;
        Self::read_json("update food", response).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let url = self.config.record_url(id)?;
        log::debug!("[store] DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| Self::network_error("delete food", e))?;
        Self::check_status("delete food", response).map(|_| ())
    }
}
