use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{ArtistFields, ArtistRecord};
use super::repository::ArtistRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Artist business service independent of web framework.
///
/// Holds nothing but its store handle; every call is resolved on its own.
pub struct ArtistService<R: ArtistRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ArtistRepository + ?Sized> ArtistService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Look up one artist. An unknown username is `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn get_by_username(&self, username: &str) -> Result<Option<ArtistRecord>, ServiceError> {
        self.repo.find_by_username(username).await
    }

    #[instrument(skip(self))]
    pub async fn list_artists(&self, page: Pagination) -> Result<Vec<ArtistRecord>, ServiceError> {
        let (limit, offset) = page.normalize();
        let rows = self.repo.list(limit, offset).await?;
        debug!(limit, offset, count = rows.len(), "artists_listed");
        Ok(rows)
    }

    /// Create a new artist. Never overwrites: an existing username is a conflict.
    ///
    /// # Examples
    /// ```
    /// use service::artist::{ArtistRecord, ArtistService, repository::mock::MockArtistRepository};
    /// use std::sync::Arc;
    /// let svc = ArtistService::new(Arc::new(MockArtistRepository::default()));
    /// let jdoe = ArtistRecord { username: "jdoe".into(), artist_name: "Jane Doe".into(), artist_genre: "rock".into(), albums_recorded: 4 };
    /// tokio_test::block_on(svc.create_artist(jdoe.clone())).unwrap();
    /// let found = tokio_test::block_on(svc.get_by_username("jdoe")).unwrap();
    /// assert_eq!(found, Some(jdoe));
    /// ```
    #[instrument(skip(self, record), fields(username = %record.username))]
    pub async fn create_artist(&self, record: ArtistRecord) -> Result<ArtistRecord, ServiceError> {
        record.validate()?;
        if self.repo.find_by_username(&record.username).await?.is_some() {
            debug!("artist exists");
            return Err(ServiceError::Conflict(record.username));
        }
        // a concurrent create can still win between the lookup and here; the store reports it
        let created = self.repo.insert(record).await?;
        info!(username = %created.username, "artist_created");
        Ok(created)
    }

    /// Replace every field of an existing artist.
    #[instrument(skip(self, fields))]
    pub async fn replace_artist(&self, username: &str, fields: ArtistFields) -> Result<ArtistRecord, ServiceError> {
        let record = fields.into_record(username);
        record.validate()?;
        if self.repo.find_by_username(username).await?.is_none() {
            return Err(ServiceError::not_found("artist"));
        }
        let saved = self.repo.save(record).await?;
        info!(username = %saved.username, "artist_replaced");
        Ok(saved)
    }
}
