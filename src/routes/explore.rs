use crate::api::Api;
use crate::routes::{envelope_props, View};
use crate::routing::{Params, RouteEntry};

const PAGE_SIZE: u32 = 20;

pub(super) fn routes(api: &Api) -> Vec<RouteEntry<View>> {
    let repos = api.explore.clone();
    let users = api.explore.clone();

    vec![RouteEntry::new("/explore", View::Explore)
        .child(
            RouteEntry::new("repos", View::ExploreRepos).loader(move |_: Params| {
                let explore = repos.clone();
                async move { envelope_props(explore.repos(1, PAGE_SIZE).await?) }
            }),
        )
        .child(
            RouteEntry::new("users", View::ExploreUsers).loader(move |_: Params| {
                let explore = users.clone();
                async move { envelope_props(explore.users(1, PAGE_SIZE).await?) }
            }),
        )]
}
