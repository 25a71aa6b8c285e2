use buildpad::configuration::AuthSettings;
use buildpad::connectors::{AuthProvider, AuthProviderClient, ConnectorError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AuthProviderClient {
    AuthProviderClient::new(&AuthSettings {
        url: server.uri(),
        anon_key: "anon".to_string(),
        service_key: "service".to_string(),
        cache_ttl_secs: 60,
    })
}

#[tokio::test]
async fn verify_sends_token_and_anon_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer user-jwt"))
        .and(header("apikey", "anon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "8f1c",
            "email": "jane@example.com",
            "role": "",
            "created_at": "2025-01-01T00:00:00Z",
            "aud": "authenticated",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server).verify("user-jwt").await.unwrap();
    assert_eq!(user.id, "8f1c");
    assert_eq!(user.email.as_deref(), Some("jane@example.com"));
    assert_eq!(user.role, "authenticated");
    assert!(user.created_at.is_some());
}

#[tokio::test]
async fn rejected_token_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "msg": "invalid JWT" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).verify("expired").await.unwrap_err();
    assert!(matches!(err, ConnectorError::Unauthorized(ref msg) if msg == "invalid JWT"));
}

#[tokio::test]
async fn create_user_confirms_email_with_service_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/admin/users"))
        .and(header("authorization", "Bearer service"))
        .and(body_partial_json(json!({
            "email": "jane@example.com",
            "email_confirm": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "new-id",
            "email": "jane@example.com",
            "role": "authenticated",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server)
        .create_user("jane@example.com", "secret1")
        .await
        .unwrap();
    assert_eq!(user.id, "new-id");
}

#[tokio::test]
async fn provider_validation_error_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/admin/users"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "msg": "Password should be at least 6 characters",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_user("jane@example.com", "123")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Password should be at least 6 characters");
    assert!(matches!(err, ConnectorError::Rejected(_)));
}

#[tokio::test]
async fn provider_outage_is_an_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/auth/v1/admin/users/gone"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).delete_user("gone").await.unwrap_err();
    assert!(matches!(err, ConnectorError::HttpError(_)));
}

#[tokio::test]
async fn delete_user_uses_admin_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/auth/v1/admin/users/8f1c"))
        .and(header("apikey", "service"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_user("8f1c").await.unwrap();
}
