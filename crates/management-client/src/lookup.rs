use async_trait::async_trait;
use log::debug;
use models::{
    collection::RemoteCollection,
    record::{RemoteRecord, contains_id},
};
use reqwest::Client;

use crate::error::LookupError;

/// Read-only existence lookup over a remote collection
#[async_trait]
pub trait ReferenceLookup: Send + Sync {
    /// Returns whether a record with `id` currently exists in `collection`
    async fn exists(&self, collection: RemoteCollection, id: i32) -> Result<bool, LookupError>;
}

/// Looks up references by fetching the management service's list endpoints
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: Client,
    base_url: String,
}

impl HttpLookup {
    /// Creates a lookup targeting the management service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, collection: RemoteCollection) -> String {
        format!("{}/{}", self.base_url, collection.as_path())
    }

    /// Fetches the full current collection
    pub async fn fetch(&self, collection: RemoteCollection) -> Result<Vec<RemoteRecord>, LookupError> {
        let url = self.collection_url(collection);
        debug!("Fetching {url}");

        let records = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<RemoteRecord>>()
            .await?;

        Ok(records)
    }
}

#[async_trait]
impl ReferenceLookup for HttpLookup {
    async fn exists(&self, collection: RemoteCollection, id: i32) -> Result<bool, LookupError> {
        let records = self.fetch(collection).await?;
        Ok(contains_id(&records, id))
    }
}
