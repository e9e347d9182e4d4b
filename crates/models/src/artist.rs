use sea_orm::{entity::prelude::*, sea_query::OnConflict, DatabaseConnection, QueryOrder, QuerySelect, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Upper bound shared by every text column of the table.
pub const MAX_TEXT_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub artist_name: String,
    pub artist_genre: String,
    pub albums_recorded: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn validate_text(field: &'static str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::validation(field, "must not be empty"));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ModelError::validation(field, format!("must be at most {MAX_TEXT_LEN} characters")));
    }
    Ok(())
}

pub fn validate_username(u: &str) -> Result<(), ModelError> {
    validate_text("username", u)
}

pub fn validate_artist_name(n: &str) -> Result<(), ModelError> {
    validate_text("artistName", n)
}

pub fn validate_artist_genre(g: &str) -> Result<(), ModelError> {
    validate_text("artistGenre", g)
}

pub fn validate_albums_recorded(n: i32) -> Result<(), ModelError> {
    if n < 0 {
        return Err(ModelError::validation("albumsRecorded", "must be >= 0"));
    }
    Ok(())
}

/// Check every column; the first failure wins.
pub fn validate(m: &Model) -> Result<(), ModelError> {
    validate_username(&m.username)?;
    validate_artist_name(&m.artist_name)?;
    validate_artist_genre(&m.artist_genre)?;
    validate_albums_recorded(m.albums_recorded)
}

fn to_active(m: &Model) -> ActiveModel {
    ActiveModel {
        username: Set(m.username.clone()),
        artist_name: Set(m.artist_name.clone()),
        artist_genre: Set(m.artist_genre.clone()),
        albums_recorded: Set(m.albums_recorded),
    }
}

fn db_err(e: DbErr) -> ModelError {
    ModelError::Db(e.to_string())
}

pub async fn find(db: &DatabaseConnection, username: &str) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(username.to_string()).one(db).await.map_err(db_err)
}

/// Insert a new row. The primary key decides races: a second insert of the
/// same username fails with `Conflict` whatever the interleaving.
pub async fn create(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    validate(&m)?;
    to_active(&m).insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ModelError::Conflict(m.username.clone()),
        _ => db_err(e),
    })
}

/// Insert or fully replace the row keyed by `username`.
pub async fn upsert(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    validate(&m)?;
    Entity::insert(to_active(&m))
        .on_conflict(
            OnConflict::column(Column::Username)
                .update_columns([Column::ArtistName, Column::ArtistGenre, Column::AlbumsRecorded])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .map_err(db_err)?;
    Ok(m)
}

/// One page of rows in username order.
pub async fn list(db: &DatabaseConnection, limit: u64, offset: u64) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Username)
        .limit(limit)
        .offset(offset)
        .all(db)
        .await
        .map_err(db_err)
}
