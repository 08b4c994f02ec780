use dioxus::prelude::*;

use crate::components::{find_category, CategoryFilter, SearchBar, SearchIntent, SearchRequest, SearchState};
use crate::contexts::{AuthContext, ToastQueue};
use crate::utils::config::ALL_CATEGORIES;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

/// Text of the toast announcing a search
fn describe_search(request: &SearchRequest, category_id: &str) -> String {
    let mut text = if request.query.is_empty() {
        "Buscando todo".to_string()
    } else {
        format!("Buscando \"{}\"", request.query)
    };
    if !request.location.is_empty() {
        text.push_str(&format!(" en {}", request.location));
    }
    if category_id != ALL_CATEGORIES {
        if let Some(category) = find_category(category_id) {
            text.push_str(&format!(" · {}", category.label));
        }
    }
    text
}

/// Landing page once signed in: search bar plus category filter
#[component]
pub fn Home() -> Element {
    let mut auth = use_context::<AuthContext>();
    let mut toasts = use_context::<ToastQueue>();
    let mut search = use_signal(SearchState::default);
    let mut selected_category = use_signal(|| ALL_CATEGORIES.to_string());

    let mut dispatch = move |intent: SearchIntent| {
        let submitted = search.write().apply(intent);
        if let Some(request) = submitted {
            toasts.info(describe_search(&request, &selected_category.read()));
        }
    };

    let greeting = match auth.current_user() {
        Some(session) => format!("Hola, {}", session.name.unwrap_or(session.email)),
        None => "Hola".to_string(),
    };
    let state = search.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        div { class: "home-container",
            div { class: "home-header",
                h1 { "{greeting}" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        toasts.clear();
                        auth.sign_out();
                    },
                    "Cerrar sesión"
                }
            }
            p { class: "home-subtitle", "¿Qué quieres reservar hoy?" }

            SearchBar {
                search_query: state.search_query,
                location_query: state.location_query,
                on_search_change: move |value| dispatch(SearchIntent::QueryChanged(value)),
                on_location_change: move |value| dispatch(SearchIntent::LocationChanged(value)),
                on_search: move |_| dispatch(SearchIntent::Submit),
            }

            CategoryFilter {
                selected_category: selected_category(),
                on_category_change: move |id| selected_category.set(id),
            }
        }
    }
}
