use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use artcat_core::{FetchError, RecordFetcher};
use artcat_sdk::{ArtcatClient, SdkConfig, SdkError};

fn client_for(server: &MockServer) -> ArtcatClient {
    ArtcatClient::new(SdkConfig::new(server.uri())).unwrap()
}

fn mona_lisa_page() -> serde_json::Value {
    json!({
        "items": [{
            "title": "Mona Lisa",
            "creator": "Leonardo da Vinci",
            "date": "1503",
            "museum": "Louvre",
            "movement": "Renaissance",
            "dbpedia": {
                "birthDate": "1452-04-15",
                "birthPlace": "Vinci",
                "nationality": "Italian",
                "movement": null
            }
        }],
        "page": 1,
        "total_pages": 3,
        "total": 120,
        "per_page": 50
    })
}

#[tokio::test]
async fn fetches_and_converts_one_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mona_lisa_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.artworks().page(1, 50).await.unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_items, 120);
    assert_eq!(page.items.len(), 1);

    let record = &page.items[0];
    assert_eq!(record.title, "Mona Lisa");
    assert_eq!(record.creator, "Leonardo da Vinci");
    assert_eq!(record.date.as_deref(), Some("1503"));

    let enrichment = record.enrichment.as_ref().expect("enrichment present");
    assert_eq!(enrichment.birth_date.as_deref(), Some("1452-04-15"));
    assert_eq!(enrichment.birth_place.as_deref(), Some("Vinci"));
    assert_eq!(enrichment.nationality.as_deref(), Some("Italian"));
    assert!(enrichment.movement.is_none());
}

#[tokio::test]
async fn null_dbpedia_means_no_enrichment() {
    let server = MockServer::start().await;

    let body = json!({
        "items": [{
            "title": "Car cu boi",
            "creator": "Nicolae Grigorescu",
            "date": null,
            "museum": null,
            "movement": null,
            "dbpedia": null
        }],
        "page": 1,
        "total_pages": 1,
        "total": 1
    });

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.artworks().page(1, 50).await.unwrap();

    let record = &page.items[0];
    assert!(record.date.is_none());
    assert!(record.museum.is_none());
    assert!(record.enrichment.is_none());
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "backend unavailable"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.artworks().page(1, 50).await.unwrap_err();

    match err {
        SdkError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "backend unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.artworks().page(1, 50).await.unwrap_err();
    assert!(matches!(err, SdkError::Parse(_)));
}

#[tokio::test]
async fn fetcher_seam_classifies_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.artworks().fetch_page(1, 50).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn fetcher_seam_reports_unreachable_endpoint() {
    // Port from a server that has already shut down: connection refused.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ArtcatClient::new(SdkConfig::new(uri)).unwrap();
    let err = client.artworks().fetch_page(1, 50).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
