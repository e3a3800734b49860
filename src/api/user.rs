use crate::api::client::{ApiClient, ApiError, Endpoint};
use crate::api::envelope::{Empty, Envelope};
use crate::api::types::{
    AddSshKeyRequest, ChangePasswordRequest, Repository, SshKey, UpdateProfileRequest,
    UserProfile,
};

/// `/user` resource.
#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /user/{username}`
    pub async fn profile(&self, username: &str) -> Result<Envelope<UserProfile>, ApiError> {
        self.client.send(Endpoint::get(["user", username])).await
    }

    /// `GET /user/{username}/repos`
    pub async fn repos(&self, username: &str) -> Result<Envelope<Vec<Repository>>, ApiError> {
        self.client
            .send(Endpoint::get(["user", username, "repos"]))
            .await
    }

    /// `PUT /user/profile`
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<Envelope<UserProfile>, ApiError> {
        self.client
            .send_json(Endpoint::put(["user", "profile"]), request)
            .await
    }

    /// `PUT /user/password`
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<Envelope<Empty>, ApiError> {
        self.client
            .send_json(Endpoint::put(["user", "password"]), request)
            .await
    }

    /// `GET /user/keys`
    pub async fn ssh_keys(&self) -> Result<Envelope<Vec<SshKey>>, ApiError> {
        self.client.send(Endpoint::get(["user", "keys"])).await
    }

    /// `POST /user/keys`
    pub async fn add_ssh_key(
        &self,
        request: &AddSshKeyRequest,
    ) -> Result<Envelope<SshKey>, ApiError> {
        self.client
            .send_json(Endpoint::post(["user", "keys"]), request)
            .await
    }

    /// `DELETE /user/keys/{id}`
    pub async fn delete_ssh_key(&self, id: i64) -> Result<Envelope<Empty>, ApiError> {
        self.client
            .send(Endpoint::delete(["user".to_string(), "keys".to_string(), id.to_string()]))
            .await
    }
}
