use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::artists::{ArtistDetailView, ArtistView, CreateArtistInput, ReplaceArtistInput};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::hello,
        crate::routes::health,
        crate::routes::artists::get_artist,
        crate::routes::artists::list_artists,
        crate::routes::artists::create_artist,
        crate::routes::artists::replace_artist,
    ),
    components(
        schemas(
            HealthResponse,
            ArtistView,
            ArtistDetailView,
            CreateArtistInput,
            ReplaceArtistInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "artists")
    )
)]
pub struct ApiDoc;
