//! Tests for the API client

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::models::{AppQuery, EventsQuery, NewUser, UserQuery, UserUpdate};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/oauth2/v2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "token_type": "bearer",
            "expires_in": 36000
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn client_for(server: &MockServer) -> OneLoginClient {
    mount_token(server).await;
    OneLoginClient::new(&ClientConfig::new(server.uri(), "id", "secret")).unwrap()
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_get_users_sends_filters_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/2/users"))
        .and(header("Authorization", "Bearer tok"))
        .and(query_param("limit", "1000"))
        .and(query_param("page", "2"))
        .and(query_param("email", "a@example.com"))
        .and(query_param("user_ids", "5,6"))
        .and(query_param_is_missing("username"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "email": "a@example.com"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = UserQuery {
        email: Some("a@example.com".to_string()),
        id: Some("5,6".to_string()),
        ..UserQuery::default()
    };

    let users = client.get_users(&query, 2, 1000).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 5);
}

#[tokio::test]
async fn test_token_reused_across_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/2/apps"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    for page in 1..=3 {
        let apps = client.get_apps(&AppQuery::default(), page, 10).await.unwrap();
        assert!(apps.is_empty());
    }
}

#[tokio::test]
async fn test_update_user_puts_partial_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/2/users/42"))
        .and(body_json(json!({"email": "new@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "email": "new@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let user = client
        .update_user(42, &UserUpdate::email("new@example.com"))
        .await
        .unwrap();
    assert_eq!(user.email.as_deref(), Some("new@example.com"));
}

#[tokio::test]
async fn test_create_user_posts_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2/users"))
        .and(body_json(json!({
            "firstname": "Jane",
            "lastname": "Doe",
            "email": "jane@example.com"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 77,
            "firstname": "Jane",
            "lastname": "Doe",
            "email": "jane@example.com",
            "status": 0
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let user = client
        .create_user(&NewUser::new("Jane", "Doe", "jane@example.com"))
        .await
        .unwrap();
    assert_eq!(user.id, 77);
    assert_eq!(user.status, Some(0));
}

#[tokio::test]
async fn test_http_error_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/2/users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get_users(&UserQuery::default(), 1, 1000)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 403, .. }));
    assert!(err.is_upstream());
}

// ============================================================================
// Apps
// ============================================================================

#[tokio::test]
async fn test_get_apps_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/2/apps"))
        .and(query_param("name", "Slack"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "name": "Slack", "visible": true}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = AppQuery {
        name: Some("Slack".to_string()),
    };
    let apps = client.get_apps(&query, 1, 1000).await.unwrap();
    assert_eq!(apps[0].id, Some(10));
}

#[tokio::test]
async fn test_get_app_users() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/2/apps/10/users"))
        .and(query_param("limit", "50"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "username": "one"},
            {"id": 2, "username": "two"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let users = client.get_app_users(10, 1, 50).await.unwrap();
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

// ============================================================================
// Events
// ============================================================================

#[tokio::test]
async fn test_list_events_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/events"))
        .and(query_param("limit", "1000"))
        .and(query_param("event_type_id", "5,13"))
        .and(query_param_is_missing("after_cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {"error": false, "code": 200, "type": "success", "message": "Success"},
            "pagination": {"before_cursor": null, "after_cursor": "abc", "previous_link": null, "next_link": "x"},
            "data": [{"id": 1, "event_type_id": 5}, {"id": 2, "event_type_id": 13}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = EventsQuery {
        event_type_id: Some("5,13".to_string()),
        ..EventsQuery::default()
    };
    let page = client.list_events(&query, None, 1000).await.unwrap();

    assert_eq!(page.records.len(), 2);
    assert_eq!(page.next_cursor.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_list_events_passes_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/events"))
        .and(query_param("after_cursor", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {"error": false, "code": 200},
            "pagination": {"after_cursor": null},
            "data": [{"id": 3}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client
        .list_events(&EventsQuery::default(), Some("abc"), 1000)
        .await
        .unwrap();

    assert_eq!(page.records[0].id, 3);
    assert!(page.continuation().is_none());
}

#[tokio::test]
async fn test_list_events_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {"error": true, "code": 400, "type": "bad request", "message": "Invalid since"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .list_events(&EventsQuery::default(), None, 1000)
        .await
        .unwrap_err();

    match err {
        Error::Api { code, message } => {
            assert_eq!(code, 400);
            assert_eq!(message, "Invalid since");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_event_types() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/events/types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {"error": false, "code": 200},
            "data": [
                {"id": 1, "name": "User Login", "description": "Logged in"},
                {"id": 2, "name": "User Logout"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let types = client.list_event_types().await.unwrap();

    assert_eq!(types.len(), 2);
    assert_eq!(types[1].name, "User Logout");
    assert!(types[1].description.is_none());
}

#[test]
fn test_envelope_without_data_is_error() {
    let envelope: V1Envelope<Vec<u32>> =
        serde_json::from_value(json!({"status": {"error": false, "code": 200}})).unwrap();
    assert!(matches!(envelope.into_data(), Err(Error::Api { code: 200, .. })));
}
