use dioxus::logger::tracing;
use dioxus::prelude::*;
use views::{Home, Login, NotFound, RecoverPassword, Register, RootLayout};

mod components;
mod contexts;
mod middleware;
mod utils;
mod views;

use components::ProtectedRoute;
use middleware::{run_middleware, MatcherConfig, MiddlewareResponse, NavigationRequest};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(RootLayout)]
        #[layout(ProtectedRoute)]
            #[route("/")]
            Home {},
        #[end_layout]
        #[route("/login")]
        Login {},
        #[route("/registro")]
        Register {},
        #[route("/recuperar-password")]
        RecoverPassword {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[cfg(feature = "desktop")]
fn main() {
    use dioxus_desktop::{Config, WindowBuilder};
    use utils::config::SITE_METADATA;

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title(SITE_METADATA.title)
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> { config: |_| router_config() }
    }
}

/// Router configuration: every navigation goes through the middleware before the route renders
fn router_config() -> RouterConfig<Route> {
    RouterConfig::<Route>::default().on_update(|state| {
        on_navigation(&state.current().to_string());
        None
    })
}

fn on_navigation(url: &str) -> Option<MiddlewareResponse> {
    match NavigationRequest::from_url(url) {
        Ok(request) => Some(run_middleware(&MatcherConfig::default(), &request)),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::is_public_path;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::Register {}.to_string(), "/registro");
        assert_eq!(Route::RecoverPassword {}.to_string(), "/recuperar-password");
    }

    #[test]
    fn test_public_routes_match_middleware() {
        assert!(!is_public_path(&Route::Home {}.to_string()));
        assert!(is_public_path(&Route::Login {}.to_string()));
        assert!(is_public_path(&Route::Register {}.to_string()));
        assert!(is_public_path(&Route::RecoverPassword {}.to_string()));
    }

    #[test]
    fn test_unknown_paths_fall_through() {
        assert_eq!(
            "/mis-reservas".parse::<Route>().ok(),
            Some(Route::NotFound { segments: vec!["mis-reservas".to_string()] })
        );
    }

    #[test]
    fn test_router_runs_middleware_on_navigation() {
        let _config: RouterConfig<Route> = router_config();
        for route in [Route::Home {}, Route::Login {}, Route::Register {}, Route::RecoverPassword {}] {
            assert_eq!(on_navigation(&route.to_string()), Some(MiddlewareResponse::PassThrough));
        }
        assert_eq!(on_navigation("/login?next=/"), Some(MiddlewareResponse::PassThrough));
        assert_eq!(on_navigation("not a path"), None);
    }
}
