use crate::api::client::{ApiClient, ApiError, Endpoint};
use crate::api::envelope::{Empty, Envelope};
use crate::api::types::{Blob, Branch, Commit, CreateRepoRequest, Repository, TreeEntry};

/// `/repo` resource.
#[derive(Clone)]
pub struct RepoApi {
    client: ApiClient,
}

impl RepoApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /repo`
    pub async fn create(
        &self,
        request: &CreateRepoRequest,
    ) -> Result<Envelope<Repository>, ApiError> {
        self.client.send_json(Endpoint::post(["repo"]), request).await
    }

    /// `GET /repo/{owner}/{name}`
    pub async fn info(&self, owner: &str, name: &str) -> Result<Envelope<Repository>, ApiError> {
        self.client.send(Endpoint::get(["repo", owner, name])).await
    }

    /// `DELETE /repo/{owner}/{name}`
    pub async fn delete(&self, owner: &str, name: &str) -> Result<Envelope<Empty>, ApiError> {
        self.client
            .send(Endpoint::delete(["repo", owner, name]))
            .await
    }

    /// `POST /repo/{owner}/{name}/star`, no body.
    pub async fn star(&self, owner: &str, name: &str) -> Result<Envelope<Empty>, ApiError> {
        self.client
            .send(Endpoint::post(["repo", owner, name, "star"]))
            .await
    }

    /// `DELETE /repo/{owner}/{name}/star`
    pub async fn unstar(&self, owner: &str, name: &str) -> Result<Envelope<Empty>, ApiError> {
        self.client
            .send(Endpoint::delete(["repo", owner, name, "star"]))
            .await
    }

    /// `POST /repo/{owner}/{name}/fork`, no body.
    pub async fn fork(&self, owner: &str, name: &str) -> Result<Envelope<Repository>, ApiError> {
        self.client
            .send(Endpoint::post(["repo", owner, name, "fork"]))
            .await
    }

    /// `GET /repo/{owner}/{name}/branches`
    pub async fn branches(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Envelope<Vec<Branch>>, ApiError> {
        self.client
            .send(Endpoint::get(["repo", owner, name, "branches"]))
            .await
    }

    /// `GET /repo/{owner}/{name}/commits/{ref}`
    pub async fn commits(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
    ) -> Result<Envelope<Vec<Commit>>, ApiError> {
        self.client
            .send(Endpoint::get(["repo", owner, name, "commits", git_ref]))
            .await
    }

    /// `GET /repo/{owner}/{name}/tree/{ref}/{path...}`
    pub async fn tree(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
        path: &str,
    ) -> Result<Envelope<Vec<TreeEntry>>, ApiError> {
        let endpoint = Endpoint::get(["repo", owner, name, "tree", git_ref]).with_path(path);
        self.client.send(endpoint).await
    }

    /// `GET /repo/{owner}/{name}/blob/{ref}/{path...}`
    pub async fn blob(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
        path: &str,
    ) -> Result<Envelope<Blob>, ApiError> {
        let endpoint = Endpoint::get(["repo", owner, name, "blob", git_ref]).with_path(path);
        self.client.send(endpoint).await
    }
}
