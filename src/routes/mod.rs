//! The application's route tree, one module per feature area.

mod auth;
mod dashboard;
mod explore;
mod repo;
mod settings;
mod user;

use std::fmt;

use serde::Serialize;

use crate::api::{Api, ApiError, Envelope};
use crate::routing::{Access, LoaderError, Params, Props, RouteComposer, RouteEntry};
use crate::state::{Breadcrumb, NavMenu};

/// Every page the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    Login,
    Register,
    ForgotPassword,
    Explore,
    ExploreRepos,
    ExploreUsers,
    Dashboard,
    NewRepository,
    Settings,
    ProfileSettings,
    AccountSettings,
    SshKeys,
    RepoHome,
    RepoTree,
    RepoBlob,
    RepoCommits,
    RepoBranches,
    UserProfile,
    NotFound,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Login => "Sign in",
            Self::Register => "Sign up",
            Self::ForgotPassword => "Forgot password",
            Self::Explore => "Explore",
            Self::ExploreRepos => "Repositories",
            Self::ExploreUsers => "Users",
            Self::Dashboard => "Dashboard",
            Self::NewRepository => "New repository",
            Self::Settings => "Settings",
            Self::ProfileSettings => "Profile",
            Self::AccountSettings => "Account",
            Self::SshKeys => "SSH keys",
            Self::RepoHome => "Code",
            Self::RepoTree => "Files",
            Self::RepoBlob => "File",
            Self::RepoCommits => "Commits",
            Self::RepoBranches => "Branches",
            Self::UserProfile => "Profile",
            Self::NotFound => "Not found",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// All feature areas in match order.
///
/// Literal top-level paths come before the `/:owner/:repo` and
/// `/:username` catch-alls, and the not-found route closes the table.
pub fn app_routes(api: &Api) -> RouteComposer<View> {
    RouteComposer::new()
        .feature(
            "home",
            Access::Public,
            [RouteEntry::new("/", View::Landing)],
        )
        .feature("auth", Access::Public, auth::routes())
        .feature("explore", Access::Public, explore::routes(api))
        .feature("dashboard", Access::Authenticated, dashboard::routes(api))
        .feature("settings", Access::Authenticated, settings::routes(api))
        .feature("repo", Access::Authenticated, repo::routes(api))
        .feature("user", Access::Authenticated, user::routes(api))
        .feature(
            "not-found",
            Access::Public,
            [RouteEntry::new("/*", View::NotFound)],
        )
}

/// Sidebar menu for the given authentication state.
pub fn nav_menu(authenticated: bool) -> Vec<NavMenu> {
    let mut explore = NavMenu::leaf("Explore", "/explore");
    explore.icon = Some("compass".to_string());
    explore.children = vec![
        NavMenu::leaf("Repositories", "/explore/repos"),
        NavMenu::leaf("Users", "/explore/users"),
    ];

    if !authenticated {
        return vec![
            NavMenu::leaf("Home", "/"),
            explore,
            NavMenu::leaf("Sign in", "/login"),
        ];
    }

    let mut settings = NavMenu::leaf("Settings", "/settings");
    settings.icon = Some("gear".to_string());
    settings.children = vec![
        NavMenu::leaf("Profile", "/settings/profile"),
        NavMenu::leaf("Account", "/settings/account"),
        NavMenu::leaf("SSH keys", "/settings/keys"),
    ];

    let mut dashboard = NavMenu::leaf("Dashboard", "/dashboard");
    dashboard.icon = Some("home".to_string());

    vec![
        dashboard,
        explore,
        NavMenu::leaf("New repository", "/new"),
        settings,
    ]
}

/// Breadcrumb trail for a location: one crumb per path prefix.
pub fn breadcrumbs_for(location: &str) -> Vec<Breadcrumb> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    let mut trail = vec![Breadcrumb::new("Home", "/")];
    let mut prefix = String::new();
    for part in path.split('/').filter(|p| !p.is_empty()) {
        prefix.push('/');
        prefix.push_str(part);
        trail.push(Breadcrumb::new(part, prefix.clone()));
    }
    trail
}

impl From<ApiError> for LoaderError {
    fn from(err: ApiError) -> Self {
        LoaderError::new(err.to_string())
    }
}

fn param<'a>(params: &'a Params, name: &str) -> Result<&'a str, LoaderError> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| LoaderError::new(format!("missing route parameter `{name}`")))
}

/// Props from a success envelope; any failure becomes a loader error.
fn envelope_props<T: Serialize>(envelope: Envelope<T>) -> Result<Props, LoaderError> {
    let data = envelope
        .into_result()
        .map_err(|failure| LoaderError::new(failure.to_string()))?;
    serde_json::to_value(data).map_err(|e| LoaderError::new(e.to_string()))
}
