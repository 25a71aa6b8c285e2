#![allow(dead_code)]

use actix_web::{delete, get, post, web, App, HttpRequest, HttpResponse, HttpServer};
use buildpad::configuration::{get_configuration, DatabaseSettings, Settings};
use buildpad::services::ScheduledJobs;
use serde_json::{json, Value};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;

pub const TAKEN_EMAIL: &str = "taken@example.com";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub jobs: ScheduledJobs,
    pub client: reqwest::Client,
}

/// Bearer token the mock auth server resolves to a user with id `user_id`.
pub fn token_for(user_id: &str) -> String {
    format!("token-{}", user_id)
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str, user_id: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .bearer_auth(token_for(user_id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str, user_id: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .bearer_auth(token_for(user_id))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn patch(&self, path: &str, user_id: &str, body: Value) -> reqwest::Response {
        self.client
            .patch(self.url(path))
            .bearer_auth(token_for(user_id))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, path: &str, user_id: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .bearer_auth(token_for(user_id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates a project for `user_id` and returns its JSON.
    pub async fn create_project(&self, user_id: &str, name: &str) -> Value {
        let response = self
            .post("/projects", user_id, json!({ "name": name }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
        response.json().await.expect("project json")
    }
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let jobs = ScheduledJobs::new();
    let server = buildpad::startup::run(
        listener,
        connection_pool.clone(),
        configuration,
        jobs.clone(),
    )
    .await
    .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    Some(TestApp {
        address,
        db_pool: connection_pool,
        jobs,
        client: reqwest::Client::new(),
    })
}

/// App wired to the mock auth server, with a fast deployment schedule
/// (2/5/7 steps of 100 ms).
pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");

    let listener =
        TcpListener::bind("127.0.0.1:0").expect("Failed to bind port for testing auth server");
    configuration.auth.url = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    configuration.auth.cache_ttl_secs = 0;
    configuration.simulator.time_unit_ms = 100;
    println!("Auth Server is running on: {}", configuration.auth.url);

    let server = mock_auth_server(listener);
    let _ = tokio::spawn(server);

    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

fn mock_user(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "role": "authenticated",
        "created_at": "2025-01-01T00:00:00Z",
    })
}

#[get("/user")]
async fn mock_verify(req: HttpRequest) -> HttpResponse {
    let user_id = req
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer token-"))
        .map(str::to_string);

    match user_id {
        Some(id) if !id.is_empty() => {
            HttpResponse::Ok().json(mock_user(&id, &format!("{}@example.com", id)))
        }
        _ => HttpResponse::Unauthorized().json(json!({ "msg": "invalid JWT" })),
    }
}

#[post("/admin/users")]
async fn mock_create_user(body: web::Json<Value>) -> HttpResponse {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if email == TAKEN_EMAIL {
        return HttpResponse::UnprocessableEntity()
            .json(json!({ "msg": "A user with this email address has already been registered" }));
    }

    let id = uuid::Uuid::new_v4().to_string();
    HttpResponse::Ok().json(mock_user(&id, &email))
}

#[delete("/admin/users/{id}")]
async fn mock_delete_user() -> HttpResponse {
    HttpResponse::Ok().json(json!({}))
}

fn mock_auth_server(listener: TcpListener) -> actix_web::dev::Server {
    HttpServer::new(|| {
        App::new().service(
            web::scope("/auth/v1")
                .service(mock_verify)
                .service(mock_create_user)
                .service(mock_delete_user),
        )
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run()
}
