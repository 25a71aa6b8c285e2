pub mod chat_responder;
pub mod deployment_simulator;
pub mod starter_files;

pub use deployment_simulator::{
    slugify, DeploymentSimulator, DeploymentStore, FixedSuffix, PgDeploymentStore, RandomSuffix,
    ScheduledJobs, SuffixSource,
};
