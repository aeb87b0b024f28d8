use log::{debug, warn};
use models::collection::RemoteCollection;

use crate::{error::ReferenceError, lookup::ReferenceLookup};

/// Confirms that `id` names an existing record of `collection`.
///
/// Performs exactly one lookup. A missing record yields
/// [`ReferenceError::NotFound`]; any transport or decoding failure yields
/// [`ReferenceError::Communication`].
pub async fn ensure_exists(
    lookup: &dyn ReferenceLookup,
    collection: RemoteCollection,
    id: i32,
) -> Result<(), ReferenceError> {
    match lookup.exists(collection, id).await {
        Ok(true) => {
            debug!("{collection} {id} resolved");
            Ok(())
        }
        Ok(false) => {
            debug!("{collection} {id} not found");
            Err(ReferenceError::NotFound { collection, id })
        }
        Err(err) => {
            warn!("Could not validate {collection} {id}: {err}");
            Err(err.into())
        }
    }
}
