use crate::api::Api;
use crate::routes::{envelope_props, View};
use crate::routing::{Params, RouteEntry};

pub(super) fn routes(api: &Api) -> Vec<RouteEntry<View>> {
    let auth = api.auth.clone();

    vec![
        RouteEntry::new("/dashboard", View::Dashboard).loader(move |_: Params| {
            let auth = auth.clone();
            async move { envelope_props(auth.current_user().await?) }
        }),
        RouteEntry::new("/new", View::NewRepository),
    ]
}
