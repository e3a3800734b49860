use crate::api::client::{ApiClient, ApiError, Endpoint};
use crate::api::envelope::Envelope;
use crate::api::types::{Page, Repository, UserSummary};

/// `/explore` resource.
#[derive(Clone)]
pub struct ExploreApi {
    client: ApiClient,
}

impl ExploreApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /explore/repos?page=&size=`
    pub async fn repos(&self, page: u32, size: u32) -> Result<Envelope<Page<Repository>>, ApiError> {
        let endpoint = Endpoint::get(["explore", "repos"])
            .with_query("page", page)
            .with_query("size", size);
        self.client.send(endpoint).await
    }

    /// `GET /explore/users?page=&size=`
    pub async fn users(&self, page: u32, size: u32) -> Result<Envelope<Page<UserSummary>>, ApiError> {
        let endpoint = Endpoint::get(["explore", "users"])
            .with_query("page", page)
            .with_query("size", size);
        self.client.send(endpoint).await
    }
}
