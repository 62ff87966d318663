//! HTTP client for the compatibility data sources.
//!
//! Every call is a single attempt: no retries, and no timeout unless one is
//! configured.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::cache::DatasetCache;
use crate::config::Settings;
use crate::error::{EmbedError, Result};
use crate::models::{CaniuseDataset, FeatureSummary, MdnFeature};

/// Request body understood by the companion MDN endpoint.
#[derive(Debug, Serialize)]
struct MdnFeatureRequest<'a> {
    feature: &'a str,
}

/// Client for the caniuse dataset and the companion API.
#[derive(Clone)]
pub struct CompatClient {
    client: Client,
    dataset_url: String,
    api_url: String,
    cache: Arc<DatasetCache>,
}

impl CompatClient {
    /// Create a client from settings, with its own dataset cache.
    ///
    /// Clones share the cache, so one client serves every request.
    pub fn new(settings: &Settings) -> Result<Self> {
        let cache = DatasetCache::with_ttl(Duration::from_secs(settings.dataset_cache_ttl));
        let mut builder = Client::builder()
            .user_agent(&settings.user_agent)
            .gzip(true)
            .brotli(true);
        if let Some(secs) = settings.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            dataset_url: settings.dataset_url.clone(),
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            cache: Arc::new(cache),
        })
    }

    /// GET a URL and decode its JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::decode(url, response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .json(body)
            .send()
            .await?;
        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(EmbedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// The caniuse dataset, from cache when fresh.
    pub async fn dataset(&self) -> Result<Arc<CaniuseDataset>> {
        if let Some(dataset) = self.cache.get(&self.dataset_url) {
            debug!("Using cached dataset for {}", self.dataset_url);
            return Ok(dataset);
        }

        let dataset: Arc<CaniuseDataset> = Arc::new(self.get_json(&self.dataset_url).await?);
        self.cache.set(&self.dataset_url, dataset.clone());
        Ok(dataset)
    }

    /// Fetch an MDN feature record from the companion service.
    pub async fn mdn_feature(&self, feature_id: &str) -> Result<MdnFeature> {
        let url = format!("{}/mdn-browser-compat-data", self.api_url);
        self.post_json(&url, &MdnFeatureRequest {
            feature: feature_id,
        })
        .await
    }

    /// Features available for embedding.
    ///
    /// Uses the companion service's list (which includes MDN features) and
    /// falls back to the caniuse dataset when the service is unavailable.
    pub async fn feature_list(&self) -> Result<Vec<FeatureSummary>> {
        let url = format!("{}/features", self.api_url);
        match self.get_json::<Vec<FeatureSummary>>(&url).await {
            Ok(features) => Ok(features),
            Err(e) => {
                warn!("Feature list unavailable ({}), using caniuse dataset", e);
                Ok(self.dataset().await?.feature_summaries())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn settings_for(server: &mockito::ServerGuard) -> Settings {
        Settings {
            dataset_url: format!("{}/data.json", server.url()),
            api_url: format!("{}/", server.url()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/data.json")
            .with_status(404)
            .create_async()
            .await;

        let client = CompatClient::new(&settings_for(&server)).unwrap();
        let err = client.dataset().await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, EmbedError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_unparseable_body_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/data.json")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = CompatClient::new(&settings_for(&server)).unwrap();
        assert!(matches!(
            client.dataset().await.unwrap_err(),
            EmbedError::Request(_)
        ));
    }

    #[tokio::test]
    async fn test_mdn_feature_posts_feature_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/mdn-browser-compat-data")
            .match_header("content-type", "application/json; charset=utf-8")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"feature": "mdn-css__properties__gap"}),
            ))
            .with_status(200)
            .with_body(r#"{"title": "gap", "mdn_url": "https://developer.mozilla.org/gap", "support": {}}"#)
            .create_async()
            .await;

        let client = CompatClient::new(&settings_for(&server)).unwrap();
        let feature = client.mdn_feature("mdn-css__properties__gap").await.unwrap();

        mock.assert_async().await;
        assert_eq!(feature.title, "gap");
    }

    #[tokio::test]
    async fn test_cached_dataset_is_fetched_once() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/data.json")
            .with_status(200)
            .with_body(r#"{"agents": {}, "data": {}}"#)
            .expect(1)
            .create_async()
            .await;

        let settings = Settings {
            dataset_cache_ttl: 60,
            ..settings_for(&server)
        };
        let client = CompatClient::new(&settings).unwrap();
        client.dataset().await.unwrap();
        client.dataset().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_feature_list_falls_back_to_dataset() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/features")
            .with_status(500)
            .create_async()
            .await;
        server
            .mock("GET", "/data.json")
            .with_status(200)
            .with_body(r#"{"agents": {}, "data": {"flexbox": {"title": "Flexbox", "stats": {}}}}"#)
            .create_async()
            .await;

        let client = CompatClient::new(&settings_for(&server)).unwrap();
        let features = client.feature_list().await.unwrap();
        assert_eq!(
            features,
            vec![FeatureSummary {
                id: "flexbox".to_string(),
                title: "Flexbox".to_string()
            }]
        );
    }
}
