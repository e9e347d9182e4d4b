//! Service layer for artist records.
//! - `artist::repository` is the store abstraction, with SeaORM and in-memory backends.
//! - `artist::service` enforces validation and create/replace rules on top of it.
//! - Errors are mapped from `models` into [`errors::ServiceError`].

pub mod errors;
pub mod pagination;
pub mod artist;
#[cfg(test)]
pub mod test_support;
