use std::sync::Arc;

use management_client::ReferenceLookup;
use sea_orm::DatabaseConnection;

/// Storage context of the management service
#[derive(Clone)]
pub struct ManagementState {
    pub db: DatabaseConnection,
}

impl ManagementState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Storage context of a service whose writes reference management records
#[derive(Clone)]
pub struct DependentState {
    pub db: DatabaseConnection,
    pub lookup: Arc<dyn ReferenceLookup>,
}

impl DependentState {
    pub fn new(db: DatabaseConnection, lookup: impl ReferenceLookup + 'static) -> Self {
        Self {
            db,
            lookup: Arc::new(lookup),
        }
    }
}
