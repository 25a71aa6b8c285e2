pub mod chat;
pub mod deployment;
pub mod file;
pub mod health_checks;
pub mod message;
pub mod profile;
pub mod project;
pub mod user;

pub use health_checks::*;
pub use profile::*;
