#[path = "../../feed_core/tests/common/mod.rs"]
mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use feed_client::{
    DecodeError, FeedClient, FeedEndpoints, FeedError, FetchMetadata, FetchOutput, FetchSettings,
    Fetcher, TransportError, TransportKind,
};
use feed_core::{id_from_slug, slug_for, JsonKind, SchemaViolation};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    feed_logging::initialize_for_tests();
}

fn client_for(server: &MockServer) -> FeedClient {
    FeedClient::new(&server.uri(), FetchSettings::default()).expect("client")
}

async fn serve(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_episodes_returns_items_in_publisher_order() {
    init_logging();
    let server = MockServer::start().await;
    serve(
        &server,
        "/json",
        ResponseTemplate::new(200).set_body_json(common::standard_feed()),
    )
    .await;

    let episodes = client_for(&server).get_episodes().await.expect("episodes");
    let ids: Vec<&str> = episodes.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["abc123", "def456", "ghi789"]);
}

#[tokio::test]
async fn get_feed_exposes_feed_metadata() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/json",
        ResponseTemplate::new(200).set_body_json(common::standard_feed()),
    )
    .await;

    let feed = client_for(&server).get_feed().await.unwrap();
    assert_eq!(feed.title, "Trail Talk");
    assert_eq!(feed.extension.categories.len(), 2);
}

#[tokio::test]
async fn get_episode_uses_item_endpoint() {
    init_logging();
    let server = MockServer::start().await;
    serve(
        &server,
        "/i/def456/json",
        ResponseTemplate::new(200).set_body_json(common::feed(vec![common::item(
            "def456",
            "https://feed.example.com/i/hill-repeats-def456",
        )])),
    )
    .await;

    let episode = client_for(&server)
        .get_episode("def456")
        .await
        .expect("lookup")
        .expect("present");
    assert_eq!(episode.id, "def456");
    assert_eq!(slug_for(&episode), "hill-repeats-def456");
}

#[tokio::test]
async fn get_episode_with_no_items_is_absent_not_error() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/i/zzz/json",
        ResponseTemplate::new(200).set_body_json(common::feed(Vec::new())),
    )
    .await;

    let result = client_for(&server).get_episode("zzz").await;
    assert_eq!(result, Ok(None));
}

#[tokio::test]
async fn get_episode_takes_first_of_several_items() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/i/abc123/json",
        ResponseTemplate::new(200).set_body_json(common::standard_feed()),
    )
    .await;

    let episode = client_for(&server).get_episode("abc123").await.unwrap();
    assert_eq!(episode.map(|e| e.id), Some("abc123".to_string()));
}

#[tokio::test]
async fn slug_routes_back_to_episode() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/i/ghi789/json",
        ResponseTemplate::new(200).set_body_json(common::feed(vec![common::item(
            "ghi789",
            "https://feed.example.com/i/long-run-ghi789",
        )])),
    )
    .await;

    let id = id_from_slug("long-run-ghi789");
    let episode = client_for(&server).get_episode(id).await.unwrap().unwrap();
    assert_eq!(episode.title, "Episode ghi789");
}

#[tokio::test]
async fn collection_timeout_is_transport_error() {
    init_logging();
    let server = MockServer::start().await;
    serve(
        &server,
        "/json",
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(250))
            .set_body_json(common::standard_feed()),
    )
    .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let client = FeedClient::new(&server.uri(), settings).unwrap();

    let err = client.get_episodes().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.transport_kind(), Some(&TransportKind::Timeout));
}

#[tokio::test]
async fn server_error_is_surfaced_without_retry() {
    let server = MockServer::start().await;
    // `expect(1)` fails the test on drop if the client retried.
    serve(&server, "/json", ResponseTemplate::new(503)).await;

    let err = client_for(&server).get_episodes().await.unwrap_err();
    assert_eq!(err.transport_kind(), Some(&TransportKind::HttpStatus(503)));
}

#[tokio::test]
async fn not_found_status_is_transport_error_not_absence() {
    let server = MockServer::start().await;
    serve(&server, "/i/gone/json", ResponseTemplate::new(404)).await;

    let err = client_for(&server).get_episode("gone").await.unwrap_err();
    assert_eq!(err.transport_kind(), Some(&TransportKind::HttpStatus(404)));
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/json",
        ResponseTemplate::new(200).set_body_raw("<html>maintenance</html>", "text/html"),
    )
    .await;

    let err = client_for(&server).get_episodes().await.unwrap_err();
    assert!(err.is_decode());
    assert!(matches!(err, FeedError::Decode(DecodeError::InvalidJson { .. })));
}

#[tokio::test]
async fn nonconforming_json_is_schema_violation_with_path() {
    let server = MockServer::start().await;
    let mut doc = common::standard_feed();
    doc["items"][1]["title"] = json!(null);
    serve(&server, "/json", ResponseTemplate::new(200).set_body_json(doc)).await;

    let err = client_for(&server).get_episodes().await.unwrap_err();
    match err {
        FeedError::Schema(violation) => {
            assert_eq!(violation.path().to_string(), "items[1].title");
            assert!(matches!(
                violation,
                SchemaViolation::WrongKind {
                    expected: JsonKind::String,
                    found: JsonKind::Null,
                    ..
                }
            ));
        }
        other => panic!("expected schema violation, got {other:?}"),
    }
}

#[tokio::test]
async fn find_episode_by_slug_handles_hyphenated_ids() {
    let server = MockServer::start().await;
    let doc = common::feed(vec![
        common::item("ep-1", "https://feed.example.com/i/warm-up-ep-1"),
        common::item("ep-2", "https://feed.example.com/i/cool-down-ep-2"),
    ]);
    serve(&server, "/json", ResponseTemplate::new(200).set_body_json(doc)).await;

    let client = client_for(&server);
    let episode = client
        .find_episode_by_slug("cool-down-ep-2")
        .await
        .unwrap()
        .expect("matched by slug");
    assert_eq!(episode.id, "ep-2");
}

#[tokio::test]
async fn find_episode_by_slug_returns_none_without_match() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/json",
        ResponseTemplate::new(200).set_body_json(common::standard_feed()),
    )
    .await;

    let found = client_for(&server)
        .find_episode_by_slug("no-such-episode")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[test]
fn invalid_base_is_rejected_at_construction() {
    let err = FeedClient::new("feed.example.com", FetchSettings::default()).unwrap_err();
    assert!(matches!(err, FeedError::InvalidBaseUrl { .. }));
}

/// Serves a fixed body and counts requests.
struct StaticFetcher {
    body: Vec<u8>,
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchOutput, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FetchOutput {
            bytes: self.body.clone(),
            metadata: FetchMetadata {
                original_url: url.to_string(),
                final_url: url.to_string(),
                redirect_count: 0,
                content_type: Some("application/json".to_string()),
                byte_len: self.body.len() as u64,
            },
        })
    }
}

#[tokio::test]
async fn every_call_is_a_fresh_round_trip() {
    let calls = Arc::new(AtomicUsize::new(0));
    let fetcher = StaticFetcher {
        body: serde_json::to_vec(&common::standard_feed()).unwrap(),
        calls: calls.clone(),
    };
    let endpoints = FeedEndpoints::new("https://feed.example.com").unwrap();
    let client = FeedClient::with_fetcher(endpoints, fetcher);

    let first = client.get_episodes().await.unwrap();
    let second = client.get_episodes().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
