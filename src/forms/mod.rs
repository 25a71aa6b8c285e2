pub mod file;
pub mod message;
pub mod project;
pub mod user;

pub use file::*;
pub use message::*;
pub use project::*;
pub use user::*;
