use crate::routes::View;
use crate::routing::RouteEntry;

pub(super) fn routes() -> Vec<RouteEntry<View>> {
    vec![
        RouteEntry::new("/login", View::Login),
        RouteEntry::new("/register", View::Register),
        RouteEntry::new("/forgot-password", View::ForgotPassword),
    ]
}
