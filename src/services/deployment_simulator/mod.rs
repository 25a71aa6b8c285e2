//! Mock deployment pipeline.
//!
//! A deploy request persists a `pending` deployment and hands it to
//! [`DeploymentSimulator::start`]. Three jobs are then scheduled, all timed
//! from the same starting instant:
//!
//! | at | status    | build log                                   |
//! |----|-----------|---------------------------------------------|
//! | +2 | building  | installing dependencies                     |
//! | +5 | deploying | dependencies installed, project built       |
//! | +7 | success   | full transcript ending with the live URL    |
//!
//! The success job also flags the owning project as deployed and copies the
//! URL onto it. Each job writes independently: a failed write is logged and
//! the remaining jobs still run. Stores only apply forward transitions, so
//! a reader never sees the status go backwards.

mod jobs;
mod store;
mod transcript;
mod url;

pub use jobs::ScheduledJobs;
pub use store::{DeploymentStore, PgDeploymentStore};
pub use url::{deployment_url, slugify, FixedSuffix, RandomSuffix, SuffixSource};

use crate::configuration::SimulatorSettings;
use crate::models::DeploymentStatus;
use std::sync::Arc;
use tokio::time::{sleep_until, Instant};
use tracing::Instrument;
use uuid::Uuid;

pub struct DeploymentSimulator {
    store: Arc<dyn DeploymentStore>,
    suffixes: Arc<dyn SuffixSource>,
    jobs: ScheduledJobs,
    settings: SimulatorSettings,
}

impl DeploymentSimulator {
    pub fn new(
        store: Arc<dyn DeploymentStore>,
        suffixes: Arc<dyn SuffixSource>,
        jobs: ScheduledJobs,
        settings: SimulatorSettings,
    ) -> Self {
        Self {
            store,
            suffixes,
            jobs,
            settings,
        }
    }

    pub fn jobs(&self) -> &ScheduledJobs {
        &self.jobs
    }

    /// Schedules the pipeline for a freshly inserted `pending` deployment and
    /// returns the URL it will be published under. Does not wait for any step.
    pub fn start(&self, deployment_id: Uuid, project_name: &str) -> String {
        let url = deployment_url(
            project_name,
            &self.suffixes.next_suffix(),
            &self.settings.domain,
        );
        let started_at = Instant::now();
        tracing::info!(deployment_id = %deployment_id, url = %url, "Starting mock deployment");

        self.schedule_advance(
            deployment_id,
            started_at + self.settings.building_delay(),
            DeploymentStatus::Building,
            transcript::building_log(),
        );
        self.schedule_advance(
            deployment_id,
            started_at + self.settings.deploying_delay(),
            DeploymentStatus::Deploying,
            transcript::deploying_log(),
        );
        self.schedule_complete(
            deployment_id,
            started_at + self.settings.success_delay(),
            url.clone(),
        );

        url
    }

    fn schedule_advance(
        &self,
        deployment_id: Uuid,
        due: Instant,
        status: DeploymentStatus,
        build_log: String,
    ) {
        let store = self.store.clone();
        let span = tracing::info_span!("Deployment transition", deployment_id = %deployment_id, status = %status);
        self.jobs.schedule(
            deployment_id,
            async move {
                sleep_until(due).await;
                match store.advance(deployment_id, status, &build_log).await {
                    Ok(true) => tracing::info!("Deployment moved to {}", status),
                    Ok(false) => tracing::debug!("Deployment already at or past {}", status),
                    Err(err) => tracing::error!(
                        deployment_id = %deployment_id,
                        "Failed to move deployment to {}: {:?}",
                        status,
                        err
                    ),
                }
            }
            .instrument(span),
        );
    }

    fn schedule_complete(&self, deployment_id: Uuid, due: Instant, url: String) {
        let store = self.store.clone();
        let span = tracing::info_span!("Deployment transition", deployment_id = %deployment_id, status = "success");
        self.jobs.schedule(
            deployment_id,
            async move {
                sleep_until(due).await;
                let build_log = transcript::success_log(&url);
                match store.complete(deployment_id, &url, &build_log).await {
                    Ok(Some(project_id)) => {
                        tracing::info!(project_id = %project_id, "Deployment live at {}", url)
                    }
                    Ok(None) => tracing::debug!("Deployment missing or already finished"),
                    Err(err) => tracing::error!(
                        deployment_id = %deployment_id,
                        "Failed to complete deployment: {:?}",
                        err
                    ),
                }
            }
            .instrument(span),
        );
    }
}
