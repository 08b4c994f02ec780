use dioxus::prelude::*;

use super::Input;

/// Search fields owned by the page that embeds the search bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub search_query: String,
    pub location_query: String,
}

/// What the user asked for through the search bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    QueryChanged(String),
    LocationChanged(String),
    Submit,
}

/// A submitted search, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub location: String,
}

impl SearchState {
    /// Apply one intent. Only `Submit` yields a request.
    pub fn apply(&mut self, intent: SearchIntent) -> Option<SearchRequest> {
        match intent {
            SearchIntent::QueryChanged(value) => {
                self.search_query = value;
                None
            }
            SearchIntent::LocationChanged(value) => {
                self.location_query = value;
                None
            }
            SearchIntent::Submit => Some(SearchRequest {
                query: self.search_query.trim().to_string(),
                location: self.location_query.trim().to_string(),
            }),
        }
    }
}

/// Enter submits from either field
pub fn submits_search(key: &Key) -> bool {
    *key == Key::Enter
}

#[derive(Props, PartialEq, Clone)]
pub struct SearchBarProps {
    #[props(into)]
    search_query: String,
    #[props(into)]
    location_query: String,
    on_search_change: EventHandler<String>,
    on_location_change: EventHandler<String>,
    on_search: EventHandler<()>,
}

#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    rsx! {
        div { class: "search-bar",
            div { class: "search-field",
                span { class: "search-icon", "🔍" }
                Input {
                    id: "search-query",
                    class: "search-input",
                    r#type: "text",
                    placeholder: "¿Qué estás buscando?",
                    value: "{props.search_query}",
                    oninput: move |evt: FormEvent| props.on_search_change.call(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if submits_search(&evt.key()) {
                            props.on_search.call(());
                        }
                    }
                }
            }
            div { class: "search-field",
                span { class: "search-icon", "📍" }
                Input {
                    id: "search-location",
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Ubicación",
                    value: "{props.location_query}",
                    oninput: move |evt: FormEvent| props.on_location_change.call(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if submits_search(&evt.key()) {
                            props.on_search.call(());
                        }
                    }
                }
            }
            button {
                class: "search-button",
                r#type: "button",
                onclick: move |_| props.on_search.call(()),
                "Buscar"
            }
        }
    }
}
