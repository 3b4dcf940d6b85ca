//! Frontend Errors

use thiserror::Error;

/// Failure to resolve a `:id` route parameter against the pet catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PetLookupError {
    #[error("pet id `{0}` is not a number")]
    InvalidId(String),
    #[error("no pet with id {0}")]
    NotFound(u32),
}
