use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use service::artist::{ArtistFields, ArtistRecord};
use service::pagination::Pagination;
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};

use crate::{errors::JsonApiError, state::ServerState};

/// List item; carries the username.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistView {
    pub artist_name: String,
    pub artist_genre: String,
    pub albums_recorded: i32,
    pub username: String,
}

/// Single-artist body; the username is already in the path.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDetailView {
    pub artist_name: String,
    pub artist_genre: String,
    pub albums_recorded: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtistInput {
    pub username: String,
    pub artist_name: String,
    pub artist_genre: String,
    pub albums_recorded: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceArtistInput {
    pub artist_name: String,
    pub artist_genre: String,
    pub albums_recorded: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page size, clamped to 1..=100 (default 20)
    pub limit: Option<i64>,
    /// Rows to skip; negative values count as 0
    pub offset: Option<i64>,
}

impl From<ArtistRecord> for ArtistView {
    fn from(a: ArtistRecord) -> Self {
        Self { artist_name: a.artist_name, artist_genre: a.artist_genre, albums_recorded: a.albums_recorded, username: a.username }
    }
}

impl From<ArtistRecord> for ArtistDetailView {
    fn from(a: ArtistRecord) -> Self {
        Self { artist_name: a.artist_name, artist_genre: a.artist_genre, albums_recorded: a.albums_recorded }
    }
}

impl From<CreateArtistInput> for ArtistRecord {
    fn from(i: CreateArtistInput) -> Self {
        Self { username: i.username, artist_name: i.artist_name, artist_genre: i.artist_genre, albums_recorded: i.albums_recorded }
    }
}

impl From<ReplaceArtistInput> for ArtistFields {
    fn from(i: ReplaceArtistInput) -> Self {
        Self { artist_name: i.artist_name, artist_genre: i.artist_genre, albums_recorded: i.albums_recorded }
    }
}

#[utoipa::path(
    get, path = "/artists/{username}", tag = "artists",
    params(("username" = String, Path, description = "Artist username")),
    responses(
        (status = 200, description = "OK", body = ArtistDetailView),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Unavailable")
    )
)]
pub async fn get_artist(State(state): State<ServerState>, Path(username): Path<String>) -> Result<Json<ArtistDetailView>, StatusCode> {
    match state.artists.get_by_username(&username).await {
        Ok(Some(a)) => Ok(Json(a.into())),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => { error!(err = %e, %username, "get artist failed"); Err(StatusCode::INTERNAL_SERVER_ERROR) },
    }
}

#[utoipa::path(
    get, path = "/artists", tag = "artists",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [ArtistView]),
        (status = 400, description = "Malformed Query"),
        (status = 500, description = "Store Unavailable")
    )
)]
pub async fn list_artists(State(state): State<ServerState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<ArtistView>>, JsonApiError> {
    let page = Pagination { limit: q.limit, offset: q.offset };
    let list = state.artists.list_artists(page).await?;
    info!(count = list.len(), "list artists");
    Ok(Json(list.into_iter().map(ArtistView::from).collect()))
}

#[utoipa::path(
    post, path = "/artists", tag = "artists",
    request_body = CreateArtistInput,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Username Taken"),
        (status = 500, description = "Store Unavailable")
    )
)]
pub async fn create_artist(State(state): State<ServerState>, payload: Result<Json<CreateArtistInput>, JsonRejection>) -> Result<StatusCode, JsonApiError> {
    let Json(input) = payload?;
    info!(username = %input.username, "artist_create_request");
    state.artists.create_artist(input.into()).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put, path = "/artists/{username}", tag = "artists",
    params(("username" = String, Path, description = "Artist username")),
    request_body = ReplaceArtistInput,
    responses(
        (status = 200, description = "Replaced", body = ArtistView),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Unavailable")
    )
)]
pub async fn replace_artist(
    State(state): State<ServerState>,
    Path(username): Path<String>,
    payload: Result<Json<ReplaceArtistInput>, JsonRejection>,
) -> Result<Json<ArtistView>, JsonApiError> {
    let Json(input) = payload?;
    let replaced = state.artists.replace_artist(&username, input.into()).await?;
    Ok(Json(replaced.into()))
}
