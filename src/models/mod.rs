mod chat;
mod deployment;
mod message;
mod project;
mod project_file;
pub mod user;

pub use chat::*;
pub use deployment::*;
pub use message::*;
pub use project::*;
pub use project_file::*;
pub use user::*;
