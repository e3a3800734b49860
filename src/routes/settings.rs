use crate::api::Api;
use crate::routes::{envelope_props, View};
use crate::routing::{Params, RouteEntry};

pub(super) fn routes(api: &Api) -> Vec<RouteEntry<View>> {
    let auth = api.auth.clone();
    let user = api.user.clone();

    vec![RouteEntry::new("/settings", View::Settings).children([
        RouteEntry::new("profile", View::ProfileSettings).loader(move |_: Params| {
            let auth = auth.clone();
            async move { envelope_props(auth.current_user().await?) }
        }),
        RouteEntry::new("account", View::AccountSettings),
        RouteEntry::new("keys", View::SshKeys).loader(move |_: Params| {
            let user = user.clone();
            async move { envelope_props(user.ssh_keys().await?) }
        }),
    ])]
}
