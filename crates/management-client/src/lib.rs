//! Existence checks against the management service.
//!
//! Services that store references to management records (classes and
//! professors) call [`ensure_exists`] before writing. The check fetches the
//! whole remote collection and scans it for the id; nothing is cached and
//! nothing is retried.

pub mod error;
pub mod lookup;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod validate;

pub use error::{LookupError, ReferenceError};
pub use lookup::{HttpLookup, ReferenceLookup};
pub use validate::ensure_exists;
