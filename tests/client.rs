//! End-to-end tests of the client against a local mock of the fanart.tv API

use fanart_api::{ClientConfig, FanartClient, FanartError, ImagesRequest, QueryType, Request};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIGHT_CLUB: &str = r#"{
    "name": "Fight Club",
    "tmdb_id": "550",
    "imdb_id": "tt0137523",
    "hdmovielogo": [
        {"id": "34", "url": "http://assets.fanart.tv/fanart/movies/550/hdmovielogo/fight-club.png", "lang": "en", "likes": "9"}
    ],
    "moviedisc": [
        {"id": "9137", "url": "https://assets.fanart.tv/fanart/movies/550/moviedisc/fight-club.png", "lang": "en", "likes": "2", "disc": "1", "disc_type": "bluray"}
    ],
    "moviethumb": [
        {"id": "1", "url": "http://x/img.jpg", "likes": "12", "disc": "", "size": "500"}
    ]
}"#;

const LATEST_SERIES: &str = r#"[
    {"id": "75682", "name": "Bones", "new_images": "1", "total_images": "90"},
    {"id": "81189", "name": "Breaking Bad", "new_images": "3", "total_images": "212"}
]"#;

fn client_for(server: &MockServer, config: ClientConfig) -> FanartClient {
    FanartClient::new(config.with_base_url(format!("{}/v3", server.uri())))
}

#[tokio::test]
async fn test_images_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/movies/tt0137523"))
        .and(header("accept", "application/json"))
        .and(header("api-key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIGHT_CLUB))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new("secret"));
    let result = client
        .images(QueryType::Movie, "tt0137523", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.name, "Fight Club");
    assert_eq!(result.id(), "tt0137523");
    assert_eq!(result.movie_thumb.len(), 1);
    assert_eq!(result.movie_thumb[0].likes, 12);
    assert_eq!(result.movie_thumb[0].disc, 0);
    assert_eq!(result.movie_thumb[0].size, 500);
    assert_eq!(result.movie_thumb[0].url, "https://x/img.jpg");
    assert_eq!(
        result.hd_movie_logo[0].url,
        "https://assets.fanart.tv/fanart/movies/550/hdmovielogo/fight-club.png"
    );
    assert_eq!(result.movie_disc[0].disc_type.as_deref(), Some("bluray"));
    assert_eq!(result.image_count(), 3);

    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("client-key").is_none());
}

#[tokio::test]
async fn test_request_value_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/tv/75682"))
        .and(header("client-key", "personal"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"name": "Bones", "thetvdb_id": "75682", "tvposter": []}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::default().with_client_key("personal"));
    let result = ImagesRequest::new(QueryType::Series, "75682")
        .execute(&client, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.id(), "75682");
    assert!(result.tv_poster.is_empty());

    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("api-key").is_none());
}

#[tokio::test]
async fn test_latest_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/tv/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LATEST_SERIES))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new("secret"));
    let latest = client
        .latest(QueryType::Series, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(latest.len(), 2);
    assert_eq!(latest[1].name, "Breaking Bad");
    assert_eq!(latest[1].id(), "81189");
    assert_eq!(latest[1].new_images, 3);
    assert_eq!(latest[1].total_images, 212);
}

#[tokio::test]
async fn test_not_found_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/movies/tt0000000"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"status": "error", "error message": "Not found"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new("secret"));
    let err = client
        .images(QueryType::Movie, "tt0000000", &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, FanartError::UnexpectedStatus { status: 404 }));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_unauthorized_status_is_not_special_cased() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new("wrong"));
    let err = client
        .latest(QueryType::Movie, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_schema_drift_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/music/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"id": "f4a31f0a-51dd-4fa7-986d-3095c40c5ed9", "name": "Evanescence", "popularity": "3"}]"#,
        ))
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new("secret"));
    let err = client
        .latest(QueryType::MusicArtist, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, FanartError::Decode(_)));
    assert!(err.to_string().contains("popularity"), "{}", err);
}

#[tokio::test]
async fn test_invalid_counter_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/movies/550"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"name": "Fight Club", "movieposter": [{"id": "1", "likes": "lots"}]}"#,
        ))
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new("secret"));
    let err = client
        .images(QueryType::Movie, "550", &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("invalid likes"), "{}", err);
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(FIGHT_CLUB)
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, ClientConfig::new("secret"));
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let err = client
        .images(QueryType::Movie, "tt0137523", &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, FanartError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    // Nothing listens on port 1, so the connection is refused.
    let config = ClientConfig::new("secret").with_base_url("http://127.0.0.1:1/v3");
    let client = FanartClient::new(config);

    let err = client
        .latest(QueryType::Movie, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, FanartError::Transport(_)));
}
