//! Types shared between the school services and the management client.

pub mod collection;
pub mod record;
