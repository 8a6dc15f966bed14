//! Store Endpoint Configuration

use reqwest::Url;

use crate::error::{StoreError, StoreResult};

/// Hosted mock store backing the storefront
pub const DEFAULT_API_BASE: &str = "https://6852821e0594059b23cdd834.mockapi.io";

/// Collection holding the food records
pub const DEFAULT_COLLECTION: &str = "Food";

/// Query parameter the store filters names by
const NAME_FILTER_PARAM: &str = "name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub collection: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// `{base}/{collection}`, optionally with `?name=<filter>`.
    ///
    /// An empty filter means the whole collection.
    pub fn collection_url(&self, name_filter: Option<&str>) -> StoreResult<Url> {
        let mut url = self.parse(&format!("{}/{}", self.base(), self.collection))?;
        if let Some(filter) = name_filter.filter(|f| !f.is_empty()) {
            url.query_pairs_mut().append_pair(NAME_FILTER_PARAM, filter);
        }
        Ok(url)
    }

    /// `{base}/{collection}/{id}`
    pub fn record_url(&self, id: &str) -> StoreResult<Url> {
        let mut url = self.parse(&format!("{}/{}", self.base(), self.collection))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::Url(format!("{} cannot carry a path", self.base_url)))?
            .push(id);
        Ok(url)
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    fn parse(&self, raw: &str) -> StoreResult<Url> {
        Url::parse(raw).map_err(|e| StoreError::Url(format!("{}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_mock_store() {
        let config = ApiConfig::default();
        let url = config.collection_url(None).unwrap();
        assert_eq!(url.as_str(), "https://6852821e0594059b23cdd834.mockapi.io/Food");
    }

    #[test]
    fn test_name_filter_is_encoded() {
        let config = ApiConfig::with_base_url("https://store.test/");
        let url = config.collection_url(Some("pad thai & co")).unwrap();
        assert_eq!(url.path(), "/Food");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("name".to_string(), "pad thai & co".to_string())]);
    }

    #[test]
    fn test_empty_filter_reads_whole_collection() {
        let config = ApiConfig::with_base_url("https://store.test");
        let url = config.collection_url(Some("")).unwrap();
        assert!(url.query().is_none());
    }

    #[test]
    fn test_record_url_escapes_id() {
        let config = ApiConfig::with_base_url("https://store.test");
        assert_eq!(config.record_url("12").unwrap().as_str(), "https://store.test/Food/12");
        assert_eq!(config.record_url("a/b").unwrap().as_str(), "https://store.test/Food/a%2Fb");
    }

    #[test]
    fn test_bad_base_url() {
        let config = ApiConfig::with_base_url("not a url");
        assert!(matches!(config.collection_url(None), Err(StoreError::Url(_))));
    }
}
