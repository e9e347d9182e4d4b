use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::artist::{repo::seaorm::SeaOrmArtistRepository, ArtistRepository, ArtistService};

/// Shared handler state, built once at startup and cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub artists: Arc<ArtistService<dyn ArtistRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ArtistRepository>) -> Self {
        Self { artists: Arc::new(ArtistService::new(repo)) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmArtistRepository::new(db)))
    }
}
