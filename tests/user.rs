mod common;

use serde_json::json;

#[tokio::test]
async fn sign_up_is_public() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .client
        .post(app.url("/users"))
        .json(&json!({ "email": "jane@example.com", "password": "secret1", "name": "Jane" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 201);
    let profile: serde_json::Value = response.json().await.unwrap();
    assert_eq!(profile["email"], "jane@example.com");
    assert_eq!(profile["name"], "Jane");
    assert!(profile["bio"].is_null());

    let id = profile["id"].as_str().unwrap();
    let response = app.get(&format!("/users/{}", id), "alice").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn provider_rejection_is_a_bad_request() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .client
        .post(app.url("/users"))
        .json(&json!({ "email": common::TAKEN_EMAIL, "password": "secret1" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Failed to create user: A user with this email address has already been registered"
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_profiles")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn invalid_sign_up_is_rejected() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .client
        .post(app.url("/users"))
        .json(&json!({ "email": "not-an-email", "password": "1" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

async fn sign_up(app: &common::TestApp, email: &str) -> String {
    let profile: serde_json::Value = app
        .client
        .post(app.url("/users"))
        .json(&json!({ "email": email, "password": "secret1" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    profile["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn users_edit_only_themselves() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let jane = sign_up(&app, "jane@example.com").await;
    let john = sign_up(&app, "john@example.com").await;

    let response = app
        .patch(&format!("/users/{}", jane), &jane, json!({ "bio": "Builds things" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let profile: serde_json::Value = response.json().await.unwrap();
    assert_eq!(profile["bio"], "Builds things");
    assert_eq!(profile["email"], "jane@example.com");

    let response = app
        .patch(&format!("/users/{}", jane), &john, json!({ "bio": "hijacked" }))
        .await;
    assert_eq!(response.status().as_u16(), 404);

    let response = app.delete(&format!("/users/{}", jane), &john).await;
    assert_eq!(response.status().as_u16(), 404);

    let list: Vec<serde_json::Value> = app.get("/users", &jane).await.json().await.unwrap();
    assert_eq!(list.len(), 2);
}

#[tokio::test]
async fn delete_removes_the_profile() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let jane = sign_up(&app, "jane@example.com").await;

    let response = app.delete(&format!("/users/{}", jane), &jane).await;
    assert_eq!(response.status().as_u16(), 204);

    let response = app.get(&format!("/users/{}", jane), "alice").await;
    assert_eq!(response.status().as_u16(), 404);
}
