//! Wires state, API and router into one explicitly passed context.

use std::sync::Arc;

use thiserror::Error;

use crate::api::{Api, ApiError, Empty, Envelope};
use crate::api::types::LoginRequest;
use crate::config::{Config, ConfigError};
use crate::routes::{app_routes, breadcrumbs_for, nav_menu, View};
use crate::routing::{NavigateOutcome, RouteError, Router};
use crate::state::{SessionUser, StateContext};
use crate::storage::{FileStorage, Storage};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

#[derive(Clone)]
pub struct App {
    state: StateContext,
    api: Api,
    router: Arc<Router<View>>,
}

impl App {
    /// Build the client over the given storage.
    ///
    /// The router starts in the authentication state the persisted session
    /// implies, and the nav menu is seeded to match.
    pub fn new(config: &Config, storage: Arc<dyn Storage>) -> Result<Self, AppError> {
        let api = Api::new(&config.api)?;
        let state = StateContext::load(storage);
        let router = Router::new(&app_routes(&api), state.is_authenticated())?;

        let app = Self {
            state,
            api,
            router: Arc::new(router),
        };
        app.seed_nav();
        Ok(app)
    }

    /// Build the client over file storage at the configured state dir.
    pub fn open(config: &Config) -> Result<Self, AppError> {
        let storage = FileStorage::new(config.storage.resolved_dir());
        Self::new(config, Arc::new(storage))
    }

    pub fn state(&self) -> &StateContext {
        &self.state
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn router(&self) -> &Router<View> {
        &self.router
    }

    /// `POST /auth/login`; a success envelope signs the session in.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Envelope<SessionUser>, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let envelope = self.api.auth.login(&request).await?;
        if let Some(user) = envelope.data() {
            self.state.sign_in(user.clone());
            self.sync_auth();
        }
        Ok(envelope)
    }

    /// `POST /auth/logout`. The local session is cleared whatever the
    /// backend answers, including on network failure.
    pub async fn logout(&self) -> Result<Envelope<Empty>, ApiError> {
        let result = self.api.auth.logout().await;
        self.state.sign_out();
        // Stale in-flight navigations before clearing the trail they would write.
        self.sync_auth();
        self.state.breadcrumb().clear();
        result
    }

    /// Push the persisted session's auth flag into the router.
    ///
    /// Returns whether the active table changed.
    pub fn sync_auth(&self) -> bool {
        let authenticated = self.state.is_authenticated();
        let changed = self.router.set_authenticated(authenticated);
        if changed {
            self.seed_nav();
        }
        changed
    }

    /// Navigate and record the breadcrumb trail as part of the commit.
    pub async fn navigate(&self, location: &str) -> NavigateOutcome<View> {
        self.router
            .navigate_then(location, |navigation| {
                self.state
                    .breadcrumb()
                    .set(breadcrumbs_for(&navigation.location));
            })
            .await
    }

    fn seed_nav(&self) {
        let menu = nav_menu(self.router.is_authenticated());
        if self.state.nav().get() != menu {
            self.state.nav().set(menu);
        }
    }
}
