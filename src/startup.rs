use crate::configuration::Settings;
use crate::connectors;
use crate::health::HealthChecker;
use crate::middleware;
use crate::routes;
use crate::services::{DeploymentSimulator, PgDeploymentStore, RandomSuffix, ScheduledJobs};
use actix_cors::Cors;
use actix_web::{dev::Server, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
    jobs: ScheduledJobs,
) -> Result<Server, std::io::Error> {
    let auth_provider = connectors::init_auth_provider(&settings.auth);
    run_with_auth(listener, pg_pool, settings, jobs, auth_provider).await
}

/// Same as [`run`] with an explicit auth provider.
pub async fn run_with_auth(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
    jobs: ScheduledJobs,
    auth_provider: web::Data<Arc<dyn connectors::AuthProvider>>,
) -> Result<Server, std::io::Error> {
    let settings_arc = Arc::new(settings.clone());
    let pg_pool_arc = Arc::new(pg_pool.clone());

    let token_cache = web::Data::new(connectors::TokenCache::new(settings.auth.cache_ttl()));

    let simulator = web::Data::new(DeploymentSimulator::new(
        Arc::new(PgDeploymentStore::new(pg_pool.clone())),
        Arc::new(RandomSuffix),
        jobs,
        settings.simulator.clone(),
    ));

    let health_checker = web::Data::new(Arc::new(HealthChecker::new(
        pg_pool_arc,
        settings_arc,
    )));

    let frontend_url = settings.frontend_url.clone();
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&frontend_url)
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(middleware::authentication::Manager::new())
            .wrap(cors)
            .wrap(TracingLogger::default())
            .service(routes::index)
            .service(routes::health_check)
            .service(routes::profile)
            .service(
                web::scope("/projects")
                    .service(routes::project::get::list)
                    .service(routes::project::add::item)
                    .service(routes::project::open::item)
                    .service(routes::project::get::item)
                    .service(routes::project::update::item)
                    .service(routes::project::delete::item)
                    .service(routes::file::get::list)
                    .service(routes::file::add::item)
                    .service(routes::chat::get::list)
                    .service(routes::chat::add::item)
                    .service(routes::deployment::deploy::item)
                    .service(routes::deployment::get::list),
            )
            .service(
                web::scope("/files")
                    .service(routes::file::get::item)
                    .service(routes::file::update::item)
                    .service(routes::file::delete::item),
            )
            .service(
                web::scope("/messages")
                    .service(routes::message::get::list)
                    .service(routes::message::add::item)
                    .service(routes::message::get::item)
                    .service(routes::message::update::item)
                    .service(routes::message::delete::item),
            )
            .service(
                web::scope("/deployments")
                    .service(routes::deployment::logs::item)
                    .service(routes::deployment::get::item),
            )
            .service(
                web::scope("/users")
                    .service(routes::user::get::list)
                    .service(routes::user::add::item)
                    .service(routes::user::get::item)
                    .service(routes::user::update::item)
                    .service(routes::user::delete::item),
            )
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
            .app_data(auth_provider.clone())
            .app_data(token_cache.clone())
            .app_data(simulator.clone())
            .app_data(health_checker.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
