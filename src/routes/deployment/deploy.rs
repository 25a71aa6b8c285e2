use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::project::owned_project;
use crate::services::DeploymentSimulator;
use actix_web::{post, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Creates a `pending` deployment and hands it to the simulator. The
/// response never waits for the pipeline.
#[tracing::instrument(name = "Deploy project.", skip(pg_pool, simulator))]
#[post("/{project_id}/deploy")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
    simulator: web::Data<DeploymentSimulator>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    let project = owned_project(pg_pool.get_ref(), project_id, &user).await?;

    let deployment = db::deployment::insert(pg_pool.get_ref(), models::Deployment::new(project.id))
        .await
        .map_err(|_err| {
            JsonResponse::<models::Deployment>::build()
                .internal_server_error("Failed to create deployment")
        })?;

    simulator.start(deployment.id, &project.name);

    Ok(HttpResponse::Created().json(deployment))
}
