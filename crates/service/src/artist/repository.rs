use async_trait::async_trait;

use super::domain::ArtistRecord;
use crate::errors::ServiceError;

/// Keyed persistence for artist records.
///
/// Absence is `Ok(None)`, never an error. Backend failures surface as
/// [`ServiceError::StoreUnavailable`].
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<ArtistRecord>, ServiceError>;
    /// Create-only write; an existing key yields [`ServiceError::Conflict`].
    async fn insert(&self, record: ArtistRecord) -> Result<ArtistRecord, ServiceError>;
    /// Insert-or-replace keyed by `username`.
    async fn save(&self, record: ArtistRecord) -> Result<ArtistRecord, ServiceError>;
    /// A page in username order.
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<ArtistRecord>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockArtistRepository {
        artists: Mutex<BTreeMap<String, ArtistRecord>>, // key: username
        unavailable: bool,
    }

    impl MockArtistRepository {
        /// A repository whose every call fails as if the backend were down.
        pub fn unavailable() -> Self {
            Self { unavailable: true, ..Default::default() }
        }

        fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, ArtistRecord>>, ServiceError> {
            if self.unavailable {
                return Err(ServiceError::StoreUnavailable("mock store offline".into()));
            }
            self.artists.lock().map_err(|e| ServiceError::StoreUnavailable(e.to_string()))
        }
    }

    #[async_trait]
    impl ArtistRepository for MockArtistRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<ArtistRecord>, ServiceError> {
            Ok(self.lock()?.get(username).cloned())
        }

        async fn insert(&self, record: ArtistRecord) -> Result<ArtistRecord, ServiceError> {
            let mut artists = self.lock()?;
            if artists.contains_key(&record.username) {
                return Err(ServiceError::Conflict(record.username));
            }
            artists.insert(record.username.clone(), record.clone());
            Ok(record)
        }

        async fn save(&self, record: ArtistRecord) -> Result<ArtistRecord, ServiceError> {
            self.lock()?.insert(record.username.clone(), record.clone());
            Ok(record)
        }

        async fn list(&self, limit: u64, offset: u64) -> Result<Vec<ArtistRecord>, ServiceError> {
            let artists = self.lock()?;
            Ok(artists
                .values()
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        }
    }
}
