use serde::{Deserialize, Serialize};

use models::artist as model;

use crate::errors::ServiceError;

/// A stored artist, keyed by `username`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub username: String,
    pub artist_name: String,
    pub artist_genre: String,
    pub albums_recorded: i32,
}

/// Everything but the key; the payload of a full replace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistFields {
    pub artist_name: String,
    pub artist_genre: String,
    pub albums_recorded: i32,
}

impl ArtistFields {
    pub fn into_record(self, username: impl Into<String>) -> ArtistRecord {
        ArtistRecord {
            username: username.into(),
            artist_name: self.artist_name,
            artist_genre: self.artist_genre,
            albums_recorded: self.albums_recorded,
        }
    }
}

impl ArtistRecord {
    /// Field checks shared by create and replace.
    pub fn validate(&self) -> Result<(), ServiceError> {
        model::validate_username(&self.username)?;
        model::validate_artist_name(&self.artist_name)?;
        model::validate_artist_genre(&self.artist_genre)?;
        model::validate_albums_recorded(self.albums_recorded)?;
        Ok(())
    }
}

impl From<model::Model> for ArtistRecord {
    fn from(m: model::Model) -> Self {
        Self {
            username: m.username,
            artist_name: m.artist_name,
            artist_genre: m.artist_genre,
            albums_recorded: m.albums_recorded,
        }
    }
}

impl From<ArtistRecord> for model::Model {
    fn from(r: ArtistRecord) -> Self {
        Self {
            username: r.username,
            artist_name: r.artist_name,
            artist_genre: r.artist_genre,
            albums_recorded: r.albums_recorded,
        }
    }
}
