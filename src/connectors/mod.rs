//! External service connectors
//!
//! Every call leaving the process goes through a trait defined here, so
//! routes and middleware depend on the trait object and tests can swap in
//! a mock.
//!
//! ```ignore
//! pub async fn handler(
//!     auth_provider: web::Data<Arc<dyn AuthProvider>>,
//! ) -> Result<impl Responder> {
//!     auth_provider.create_user(&email, &password).await?;
//! }
//! ```

pub mod auth_provider;
pub mod errors;

pub use auth_provider::{AuthProvider, AuthProviderClient, TokenCache};
pub use errors::ConnectorError;

pub use auth_provider::init as init_auth_provider;
