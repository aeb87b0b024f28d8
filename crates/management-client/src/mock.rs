//! In-memory [`ReferenceLookup`] for tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use models::collection::RemoteCollection;

use crate::{error::LookupError, lookup::ReferenceLookup};

/// A lookup backed by fixed id lists, recording every collection it is asked about
#[derive(Debug, Clone, Default)]
pub struct MockLookup {
    collections: HashMap<RemoteCollection, Vec<i32>>,
    unreachable: bool,
    calls: Arc<Mutex<Vec<RemoteCollection>>>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `ids` to `collection`
    pub fn with(mut self, collection: RemoteCollection, ids: &[i32]) -> Self {
        self.collections
            .entry(collection)
            .or_default()
            .extend_from_slice(ids);
        self
    }

    /// A lookup whose every call fails as if the remote were down
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    /// Collections queried so far, in call order
    pub fn calls(&self) -> Vec<RemoteCollection> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ReferenceLookup for MockLookup {
    async fn exists(&self, collection: RemoteCollection, id: i32) -> Result<bool, LookupError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(collection);
        }

        if self.unreachable {
            return Err(LookupError::Unreachable(
                "error sending request: connection refused".to_string(),
            ));
        }

        Ok(self
            .collections
            .get(&collection)
            .is_some_and(|ids| ids.contains(&id)))
    }
}
