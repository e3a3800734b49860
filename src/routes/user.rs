use crate::api::Api;
use crate::routes::{envelope_props, param, View};
use crate::routing::{Params, RouteEntry};

pub(super) fn routes(api: &Api) -> Vec<RouteEntry<View>> {
    let user = api.user.clone();

    vec![
        RouteEntry::new("/:username", View::UserProfile).loader(move |params: Params| {
            let user = user.clone();
            async move {
                let username = param(&params, "username")?;
                envelope_props(user.profile(username).await?)
            }
        }),
    ]
}
