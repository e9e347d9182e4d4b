use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::artist::domain::ArtistRecord;
use crate::artist::repository::ArtistRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmArtistRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ArtistRepository for SeaOrmArtistRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<ArtistRecord>, ServiceError> {
        let found = models::artist::find(&self.db, username).await?;
        Ok(found.map(ArtistRecord::from))
    }

    async fn insert(&self, record: ArtistRecord) -> Result<ArtistRecord, ServiceError> {
        let created = models::artist::create(&self.db, record.into()).await?;
        Ok(created.into())
    }

    async fn save(&self, record: ArtistRecord) -> Result<ArtistRecord, ServiceError> {
        let saved = models::artist::upsert(&self.db, record.into()).await?;
        Ok(saved.into())
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<ArtistRecord>, ServiceError> {
        let rows = models::artist::list(&self.db, limit, offset).await?;
        Ok(rows.into_iter().map(ArtistRecord::from).collect())
    }
}
