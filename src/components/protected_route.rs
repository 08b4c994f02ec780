use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::contexts::AuthContext;
use crate::middleware::is_public_path;
use crate::Route;

/// Layout guarding everything below it: visitors without a session on a
/// non-public path are sent to the login page.
#[component]
pub fn ProtectedRoute() -> Element {
    let auth = use_context::<AuthContext>();
    let route = use_route::<Route>();
    let path = route.to_string();
    let allowed = is_public_path(&path) || auth.is_authenticated();

    use_effect(use_reactive!(|(allowed, path)| {
        if !allowed {
            tracing::info!("Redirecting unauthenticated visit to {}", path);
            navigator().replace(Route::Login {});
        }
    }));

    if !allowed {
        return rsx! {
            div { class: "redirecting", "Redirigiendo al inicio de sesión..." }
        };
    }

    rsx! {
        Outlet::<Route> {}
    }
}
