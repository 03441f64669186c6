use std::time::Duration;

use heroes_tui::api::HERO_STATS_PATH;
use heroes_tui::{ApiError, HeroesClient};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer) -> HeroesClient {
    HeroesClient::with_timeout(&server.uri(), Duration::from_secs(5)).unwrap()
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(HERO_STATS_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Decoding
// ============================================================================

#[tokio::test]
async fn test_fetch_heroes_decodes_records() {
    let server = MockServer::start().await;
    let body = serde_json::json!([
        {
            "id": 1,
            "name": "npc_dota_hero_antimage",
            "localized_name": "Anti-Mage",
            "icon": "/apps/dota2/images/heroes/antimage_icon.png",
            "primary_attr": "agi",
            "roles": ["Carry", "Escape"],
            "pro_pick": 120,
            "pro_ban": 80,
            "pro_win": 61
        },
        {
            "id": 2,
            "name": "npc_dota_hero_axe",
            "localized_name": "Axe",
            "icon": "/apps/dota2/images/heroes/axe_icon.png",
            "pro_ban": null
        }
    ]);
    mount(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let heroes = client_for(&server).fetch_heroes().await.unwrap();

    assert_eq!(heroes.len(), 2);
    assert_eq!(heroes[0].localized_name, "Anti-Mage");
    assert_eq!(heroes[0].pro_pick, Some(120));
    assert_eq!(heroes[0].wins(), 61);
    assert_eq!(heroes[1].pro_pick, None);
    assert_eq!(heroes[1].pro_ban, None);
    assert_eq!((heroes[1].picks(), heroes[1].bans(), heroes[1].wins()), (0, 0, 0));
}

#[tokio::test]
async fn test_fetch_heroes_empty_list() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(serde_json::json!([]))).await;

    let heroes = client_for(&server).fetch_heroes().await.unwrap();

    assert!(heroes.is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_fetch_heroes_server_error_status() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(500).set_body_string("boom")).await;

    let err = client_for(&server).fetch_heroes().await.unwrap_err();

    match err {
        ApiError::Status { status, url } => {
            assert_eq!(status, 500);
            assert_eq!(url, format!("{}{}", server.uri(), HERO_STATS_PATH));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_heroes_not_found_status() {
    let server = MockServer::start().await;

    // Nothing mounted: wiremock answers 404
    let err = client_for(&server).fetch_heroes().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_fetch_heroes_malformed_body() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("<html>nope</html>")).await;

    let err = client_for(&server).fetch_heroes().await.unwrap_err();

    match err {
        ApiError::Request(e) => assert!(e.is_decode()),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_heroes_times_out() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!([]))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let client = HeroesClient::with_timeout(&server.uri(), Duration::from_millis(200)).unwrap();
    let err = client.fetch_heroes().await.unwrap_err();

    match err {
        ApiError::Request(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}
