mod common;

use common::{StaticProvider, ids, token};
use mockito::{Matcher, Server};
use newrel::{
    spotify::{albums, fetch_all, releases},
    types::Paging,
};
use serde_json::json;

fn tracks_page(server: &Server, ids: &[&str], next: Option<&str>) -> String {
    let items: Vec<_> = ids.iter().map(|id| json!({ "id": id, "type": "track" })).collect();
    let next = next.map(|path| format!("{}{}", server.url(), path));
    json!({ "items": items, "next": next, "limit": 2 }).to_string()
}

#[tokio::test]
async fn test_fetch_all_concatenates_pages_in_order() {
    let mut server = Server::new_async().await;
    let page_1 = tracks_page(&server, &["t1", "t2"], Some("/page-2"));
    let page_2 = tracks_page(&server, &["t3", "t4"], Some("/page-3"));
    let page_3 = tracks_page(&server, &["t5"], None);

    for (path, body) in [("/start", page_1), ("/page-2", page_2), ("/page-3", page_3)] {
        server
            .mock("GET", path)
            .match_header("authorization", "Bearer valid")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;
    }

    let provider = StaticProvider::failing();
    let start_url = format!("{}/start", server.url());
    let items = fetch_all::<Paging, _>(&start_url, Some("valid"), &provider).await;

    assert_eq!(ids(&items), vec!["t1", "t2", "t3", "t4", "t5"]);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_fetch_all_single_page_without_next_field() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/start")
        .with_status(200)
        .with_body(r#"{"items":[{"id":"only"}]}"#)
        .create_async()
        .await;

    let provider = StaticProvider::failing();
    let start_url = format!("{}/start", server.url());
    let items = fetch_all::<Paging, _>(&start_url, Some("valid"), &provider).await;

    assert_eq!(ids(&items), vec!["only"]);
}

#[tokio::test]
async fn test_get_new_releases_reads_nested_albums_paging() {
    let mut server = Server::new_async().await;
    let page_1 = json!({
        "albums": {
            "items": [{ "id": "a1", "name": "First" }],
            "next": format!("{}/browse/new-releases/page-2", server.url())
        }
    });
    let page_2 = json!({
        "albums": {
            "items": [{ "id": "a2", "name": "Second" }, { "id": "a3", "name": "Third" }],
            "next": null
        }
    });
    server
        .mock("GET", "/browse/new-releases")
        .with_status(200)
        .with_body(page_1.to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/browse/new-releases/page-2")
        .with_status(200)
        .with_body(page_2.to_string())
        .create_async()
        .await;

    let provider = StaticProvider::failing();
    let albums = releases::get_new_releases(&server.url(), Some("valid"), &provider).await;

    assert_eq!(ids(&albums), vec!["a1", "a2", "a3"]);
    assert_eq!(albums[0]["name"], json!("First"));
}

#[tokio::test]
async fn test_get_new_releases_without_next_key_yields_empty() {
    let mut server = Server::new_async().await;
    let page_1 = json!({
        "albums": {
            "items": [{ "id": "a1" }],
            "next": format!("{}/browse/new-releases/page-2", server.url())
        }
    });
    server
        .mock("GET", "/browse/new-releases")
        .with_status(200)
        .with_body(page_1.to_string())
        .create_async()
        .await;
    let truncated = server
        .mock("GET", "/browse/new-releases/page-2")
        .with_status(200)
        .with_body(r#"{"albums":{"items":[{"id":"a2"}]}}"#)
        .expect(1)
        .create_async()
        .await;

    let provider = StaticProvider::failing();
    let albums = releases::get_new_releases(&server.url(), Some("valid"), &provider).await;

    truncated.assert_async().await;
    assert!(albums.is_empty());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_get_album_tracks_requests_album_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/albums/4aawyAB9vmqN3uQ7FjRGTy/tracks")
        .match_header("authorization", "Bearer valid")
        .with_status(200)
        .with_body(r#"{"items":[{"id":"t1","name":"Intro"}],"next":null}"#)
        .create_async()
        .await;

    let provider = StaticProvider::failing();
    let tracks = albums::get_album_tracks(
        &server.url(),
        "4aawyAB9vmqN3uQ7FjRGTy",
        Some("valid"),
        &provider,
    )
    .await;

    mock.assert_async().await;
    assert_eq!(tracks, vec![json!({ "id": "t1", "name": "Intro" })]);
}

#[tokio::test]
async fn test_fetch_all_refreshes_token_and_retries_same_page() {
    let mut server = Server::new_async().await;
    let page_1 = tracks_page(&server, &["t1", "t2"], Some("/page-2"));
    let page_2 = tracks_page(&server, &["t3"], None);

    let first = server
        .mock("GET", "/start")
        .match_header("authorization", "Bearer stale")
        .with_status(200)
        .with_body(page_1)
        .expect(1)
        .create_async()
        .await;
    let rejected = server
        .mock("GET", "/page-2")
        .match_header("authorization", "Bearer stale")
        .with_status(401)
        .with_body(r#"{"items":[{"id":"never"}],"next":null}"#)
        .expect(1)
        .create_async()
        .await;
    let retried = server
        .mock("GET", "/page-2")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_body(page_2)
        .expect(1)
        .create_async()
        .await;

    let provider = StaticProvider::new(token("fresh"));
    let start_url = format!("{}/start", server.url());
    let items = fetch_all::<Paging, _>(&start_url, Some("stale"), &provider).await;

    first.assert_async().await;
    rejected.assert_async().await;
    retried.assert_async().await;
    assert_eq!(ids(&items), vec!["t1", "t2", "t3"]);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_fetch_all_without_initial_token_refreshes_on_first_request() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/start")
        .match_header("authorization", Matcher::Regex(r"^Bearer\s*$".to_string()))
        .with_status(401)
        .create_async()
        .await;
    server
        .mock("GET", "/start")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_body(r#"{"items":[{"id":"t1"}],"next":null}"#)
        .create_async()
        .await;

    let provider = StaticProvider::new(token("fresh"));
    let start_url = format!("{}/start", server.url());
    let items = fetch_all::<Paging, _>(&start_url, None, &provider).await;

    assert_eq!(ids(&items), vec!["t1"]);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_fetch_all_failed_refresh_discards_previous_pages() {
    let mut server = Server::new_async().await;
    let page_1 = tracks_page(&server, &["t1", "t2"], Some("/page-2"));
    let page_2 = tracks_page(&server, &["t3", "t4"], Some("/page-3"));
    server
        .mock("GET", "/start")
        .with_status(200)
        .with_body(page_1)
        .create_async()
        .await;
    server
        .mock("GET", "/page-2")
        .with_status(200)
        .with_body(page_2)
        .create_async()
        .await;
    let rejected = server
        .mock("GET", "/page-3")
        .with_status(401)
        .with_body(r#"{"error":{"status":401,"message":"The access token expired"}}"#)
        .expect(1)
        .create_async()
        .await;

    let provider = StaticProvider::failing();
    let start_url = format!("{}/start", server.url());
    let items = fetch_all::<Paging, _>(&start_url, Some("stale"), &provider).await;

    rejected.assert_async().await;
    assert!(items.is_empty());
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_fetch_all_rate_limited_page_aborts_listing() {
    let mut server = Server::new_async().await;
    let page_1 = tracks_page(&server, &["t1"], Some("/page-2"));
    server
        .mock("GET", "/start")
        .with_status(200)
        .with_body(page_1)
        .create_async()
        .await;
    server
        .mock("GET", "/page-2")
        .with_status(429)
        .with_header("retry-after", "5")
        .with_body(r#"{"error":{"status":429,"message":"API rate limit exceeded"}}"#)
        .create_async()
        .await;

    let provider = StaticProvider::new(token("fresh"));
    let start_url = format!("{}/start", server.url());
    let items = fetch_all::<Paging, _>(&start_url, Some("valid"), &provider).await;

    assert!(items.is_empty());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_fetch_all_network_error_yields_empty() {
    let provider = StaticProvider::new(token("fresh"));
    let items = fetch_all::<Paging, _>("http://127.0.0.1:1/start", Some("valid"), &provider).await;

    assert!(items.is_empty());
    assert_eq!(provider.calls(), 0);
}
