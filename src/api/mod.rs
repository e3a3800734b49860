//! Typed façades over the backend REST resources.
//!
//! Every method issues exactly one HTTP call and returns the envelope as
//! received: no retries, no caching, no translation of result codes.

mod auth;
mod client;
mod envelope;
mod explore;
mod repo;
pub mod types;
mod user;

pub use auth::AuthApi;
pub use client::{ApiClient, ApiError, REQUEST_ID_HEADER};
pub use envelope::{Empty, Envelope, Failure, SUCCESS_CODE};
pub use explore::ExploreApi;
pub use repo::RepoApi;
pub use user::UserApi;

use crate::config::ApiConfig;

/// All resource wrappers sharing one client.
#[derive(Clone)]
pub struct Api {
    pub auth: AuthApi,
    pub user: UserApi,
    pub repo: RepoApi,
    pub explore: ExploreApi,
}

impl Api {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::from_client(ApiClient::new(config)?))
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self {
            auth: AuthApi::new(client.clone()),
            user: UserApi::new(client.clone()),
            repo: RepoApi::new(client.clone()),
            explore: ExploreApi::new(client),
        }
    }
}
