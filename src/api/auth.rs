use crate::api::client::{ApiClient, ApiError, Endpoint};
use crate::api::envelope::{Empty, Envelope};
use crate::api::types::{LoginRequest, RegisterRequest};
use crate::state::SessionUser;

/// `/auth` resource.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<Envelope<SessionUser>, ApiError> {
        self.client
            .send_json(Endpoint::post(["auth", "login"]), request)
            .await
    }

    /// `POST /auth/register`
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<Envelope<SessionUser>, ApiError> {
        self.client
            .send_json(Endpoint::post(["auth", "register"]), request)
            .await
    }

    /// `POST /auth/logout`
    pub async fn logout(&self) -> Result<Envelope<Empty>, ApiError> {
        self.client.send(Endpoint::post(["auth", "logout"])).await
    }

    /// `GET /auth/user`
    pub async fn current_user(&self) -> Result<Envelope<SessionUser>, ApiError> {
        self.client.send(Endpoint::get(["auth", "user"])).await
    }
}
