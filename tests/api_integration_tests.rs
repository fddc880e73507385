use mailerdash::api::{ApiError, FormType, MailerLiteApi, MailerLiteClient};
use mailerdash::api::{Campaign, Subscriber};
use mailerdash::tui::views::Resource;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param, query_param_is_missing},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer) -> MailerLiteClient {
    MailerLiteClient::new("test-token".to_string(), Some(server.uri())).unwrap()
}

fn subscriber_json(n: usize) -> serde_json::Value {
    json!({
        "id": n.to_string(),
        "email": format!("user{n}@example.com"),
        "status": "active",
        "source": "api",
        "opens_count": n,
        "clicks_count": 0,
        "open_rate": 0,
        "click_rate": 0,
        "subscribed_at": "2024-01-15 09:30:00"
    })
}

fn campaign_json(n: usize) -> serde_json::Value {
    json!({
        "id": n.to_string(),
        "name": format!("Campaign {n}"),
        "status": "sent",
        "type_for_humans": "Regular",
        "stats": {
            "sent": 10,
            "opens_count": 5,
            "clicks_count": 1,
            "open_rate": {"float": 0.5, "string": "50%"},
            "click_rate": {"float": 0.1, "string": "10%"}
        },
        "created_at": "2024-02-01 12:00:00",
        "scheduled_for": null
    })
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_subscribers_first_page_sends_auth_and_no_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscribers"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .and(query_param("limit", "25"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [subscriber_json(1), subscriber_json(2)],
            "meta": {"next_cursor": "abc"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server)
        .list_subscribers("", 25)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].email, "user1@example.com");
    assert_eq!(page.next_cursor, "abc");
}

#[tokio::test]
async fn test_forms_use_type_in_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forms/embedded"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "9", "name": "Footer", "type": "embedded", "active": true}],
            "links": {"next": null}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server)
        .list_forms(FormType::Embedded, 2, 10)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].form_type, "embedded");
    assert!(!page.has_next);
}

// ============================================================================
// Complete Fetches
// ============================================================================

#[tokio::test]
async fn test_campaigns_fetch_all_follows_links_next() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": (0..25).map(campaign_json).collect::<Vec<_>>(),
            "links": {"next": format!("{}/campaigns?page=2", mock_server.uri())}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": (25..30).map(campaign_json).collect::<Vec<_>>(),
            "links": {"next": null}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let campaigns = Campaign::fetch_all(&client, (), 100).await.unwrap();

    assert_eq!(campaigns.len(), 30);
    assert_eq!(campaigns[29].name, "Campaign 29");
    assert_eq!(campaigns[0].stats.open_rate.string, "50%");
}

#[tokio::test]
async fn test_subscribers_fetch_all_follows_cursor_and_truncates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscribers"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": (0..25).map(subscriber_json).collect::<Vec<_>>(),
            "meta": {"next_cursor": "page2"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/subscribers"))
        .and(query_param("cursor", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": (25..50).map(subscriber_json).collect::<Vec<_>>(),
            "meta": {"next_cursor": "page3"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let subscribers = Subscriber::fetch_all(&client, (), 30).await.unwrap();

    assert_eq!(subscribers.len(), 30);
    assert_eq!(subscribers[29].id, "29");
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_unauthorized_maps_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthenticated."})),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).list_groups(1, 25).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Api {
            status: 401,
            message: "Unauthenticated.".to_string()
        }
    );
}

#[tokio::test]
async fn test_error_on_second_page_returns_no_partial_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": (0..25).map(campaign_json).collect::<Vec<_>>(),
            "links": {"next": "more"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = Campaign::fetch_all(&client, (), 0).await;

    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/automations"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .list_automations(1, 25)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client =
        MailerLiteClient::new("t".to_string(), Some("http://127.0.0.1:1".to_string())).unwrap();
    let err = client.list_campaigns(1, 25).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
