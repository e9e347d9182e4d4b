use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::artist::repository::{mock::MockArtistRepository, ArtistRepository};
use tokio::net::TcpListener;

use server::startup::{build_app, build_state};
use server::state::ServerState;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn serve(state: ServerState) -> anyhow::Result<TestApp> {
    let app = build_app(state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

async fn start_mock_server() -> anyhow::Result<TestApp> {
    serve(ServerState::new(Arc::new(MockArtistRepository::default()))).await
}

async fn start_sqlite_server() -> anyhow::Result<TestApp> {
    let state = build_state(&models::db::sqlite_memory_config()).await?;
    serve(state).await
}

fn jdoe() -> Value {
    json!({"username": "jdoe", "artistName": "Jane Doe", "artistGenre": "rock", "albumsRecorded": 4})
}

#[tokio::test]
async fn e2e_public_hello_and_health() -> anyhow::Result<()> {
    let app = start_mock_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(app.url("/")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "Hello world");

    let res = c.get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_jdoe_scenario() -> anyhow::Result<()> {
    let app = start_sqlite_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/artists")).json(&jdoe()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert!(res.text().await?.is_empty());

    let res = c.get(app.url("/artists/jdoe")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.text().await?,
        r#"{"artistName":"Jane Doe","artistGenre":"rock","albumsRecorded":4}"#
    );

    let res = c.get(app.url("/artists/nobody")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.text().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_duplicate_create_is_conflict() -> anyhow::Result<()> {
    let app = start_sqlite_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/artists")).json(&jdoe()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let other = json!({"username": "jdoe", "artistName": "Impostor", "artistGenre": "pop", "albumsRecorded": 1});
    let res = c.post(app.url("/artists")).json(&other).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Conflict");

    let body = c.get(app.url("/artists/jdoe")).send().await?.json::<Value>().await?;
    assert_eq!(body["artistName"], "Jane Doe");
    Ok(())
}

#[tokio::test]
async fn e2e_create_validation_errors_are_400() -> anyhow::Result<()> {
    let app = start_mock_server().await?;
    let c = reqwest::Client::new();

    let cases = [
        json!({"username": "jdoe", "artistName": "Jane Doe", "artistGenre": "rock", "albumsRecorded": -1}),
        json!({"username": "jdoe", "artistName": "", "artistGenre": "rock", "albumsRecorded": 1}),
        json!({"username": "jdoe", "artistGenre": "rock", "albumsRecorded": 1}),
        json!({"username": "jdoe", "artistName": "Jane Doe", "artistGenre": "rock", "albumsRecorded": "four"}),
        json!({"username": "jdoe", "artistName": "x".repeat(256), "artistGenre": "rock", "albumsRecorded": 1}),
    ];
    for body in cases {
        let res = c.post(app.url("/artists")).json(&body).send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST, "body: {body}");
    }

    let res = c
        .post(app.url("/artists"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    // nothing was stored
    let list = c.get(app.url("/artists")).send().await?.json::<Vec<Value>>().await?;
    assert!(list.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_validation_detail_names_field() -> anyhow::Result<()> {
    let app = start_mock_server().await?;
    let bad = json!({"username": "jdoe", "artistName": "Jane", "artistGenre": "rock", "albumsRecorded": -1});
    let res = reqwest::Client::new().post(app.url("/artists")).json(&bad).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Validation Error");
    assert!(body["detail"].as_str().unwrap_or_default().contains("albumsRecorded"));
    Ok(())
}

#[tokio::test]
async fn e2e_list_paginates() -> anyhow::Result<()> {
    let app = start_sqlite_server().await?;
    let c = reqwest::Client::new();

    for (u, genre) in [("one", "rock"), ("two", "jazz"), ("three", "classic")] {
        let body = json!({"username": u, "artistName": format!("Musician {u}"), "artistGenre": genre, "albumsRecorded": 1});
        let res = c.post(app.url("/artists")).json(&body).send().await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let first = c.get(app.url("/artists?limit=2&offset=0")).send().await?.json::<Vec<Value>>().await?;
    let rest = c.get(app.url("/artists?limit=2&offset=2")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(first.len(), 2);
    assert_eq!(rest.len(), 1);

    let mut names: Vec<String> = first
        .iter()
        .chain(rest.iter())
        .map(|a| a["username"].as_str().unwrap_or_default().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["one", "three", "two"]);

    let item = &first[0];
    for key in ["artistName", "artistGenre", "albumsRecorded", "username"] {
        assert!(item.get(key).is_some(), "missing {key}");
    }

    // out-of-range values clamp
    let clamped = c.get(app.url("/artists?limit=0&offset=-4")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(clamped.len(), 1);

    let res = c.get(app.url("/artists?limit=abc")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_replace_existing_artist() -> anyhow::Result<()> {
    let app = start_sqlite_server().await?;
    let c = reqwest::Client::new();
    let replacement = json!({"artistName": "Jane D.", "artistGenre": "blues", "albumsRecorded": 5});

    let res = c.put(app.url("/artists/jdoe")).json(&replacement).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let _ = c.post(app.url("/artists")).json(&jdoe()).send().await?;
    let res = c.put(app.url("/artists/jdoe")).json(&replacement).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["username"], "jdoe");
    assert_eq!(body["albumsRecorded"], 5);

    let body = c.get(app.url("/artists/jdoe")).send().await?.json::<Value>().await?;
    assert_eq!(body["artistGenre"], "blues");
    Ok(())
}

#[tokio::test]
async fn e2e_store_failure_is_500() -> anyhow::Result<()> {
    let repo: Arc<dyn ArtistRepository> = Arc::new(MockArtistRepository::unavailable());
    let app = serve(ServerState::new(repo)).await?;
    let c = reqwest::Client::new();

    let res = c.get(app.url("/artists/jdoe")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let res = c.get(app.url("/artists")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let res = c.post(app.url("/artists")).json(&jdoe()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_mock_server().await?;
    let res = reqwest::Client::new().get(app.url("/api-docs/openapi.json")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["paths"].get("/artists/{username}").is_some());
    Ok(())
}
