use super::models::{ComponentHealth, HealthCheckResponse};
use crate::configuration::Settings;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HealthChecker {
    pg_pool: Arc<PgPool>,
    settings: Arc<Settings>,
    start_time: Instant,
}

impl HealthChecker {
    pub fn new(pg_pool: Arc<PgPool>, settings: Arc<Settings>) -> Self {
        Self {
            pg_pool,
            settings,
            start_time: Instant::now(),
        }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let uptime = self.start_time.elapsed().as_secs_f64();
        let mut response =
            HealthCheckResponse::new(version, uptime, self.settings.environment.clone());

        let db_health = timeout(CHECK_TIMEOUT, self.check_database())
            .await
            .unwrap_or_else(|_| ComponentHealth::unhealthy("Timeout".to_string()));
        response.add_component("database".to_string(), db_health);

        response
    }

    #[tracing::instrument(name = "Check database health", skip(self))]
    async fn check_database(&self) -> ComponentHealth {
        let start = Instant::now();

        match sqlx::query("SELECT 1 as health_check")
            .fetch_one(self.pg_pool.as_ref())
            .await
        {
            Ok(_) => {
                let elapsed = start.elapsed().as_millis() as u64;
                let pool_size = self.pg_pool.size();
                let idle_connections = self.pg_pool.num_idle();
                let mut details = HashMap::new();
                details.insert("pool_size".to_string(), serde_json::json!(pool_size));
                details.insert(
                    "idle_connections".to_string(),
                    serde_json::json!(idle_connections),
                );

                ComponentHealth::healthy(elapsed).with_details(details)
            }
            Err(e) => {
                tracing::error!("Database health check failed: {:?}", e);
                ComponentHealth::unhealthy(format!("Database error: {}", e))
            }
        }
    }
}
