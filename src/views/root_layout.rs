use crate::components::Toaster;
use crate::contexts::{AuthContext, ToastQueue};
use crate::utils::config::SITE_METADATA;
use crate::Route;
use dioxus::prelude::*;

const LAYOUT_CSS: Asset = asset!("/assets/styling/layout.css");

/// Wraps every page: document metadata, the auth and toast contexts, and the
/// global toaster after the page content.
#[component]
pub fn RootLayout() -> Element {
    use_context_provider(AuthContext::new);
    use_context_provider(ToastQueue::new);

    let meta = SITE_METADATA;

    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: meta.description }
        document::Meta { name: "keywords", content: meta.keywords_content() }
        document::Meta { property: "og:title", content: meta.og_title }
        document::Meta { property: "og:description", content: meta.og_description }
        document::Meta { property: "og:type", content: meta.og_type }
        document::Meta { property: "og:locale", content: meta.locale }
        document::Link { rel: "stylesheet", href: LAYOUT_CSS }

        div { class: "app-shell",
            header { class: "app-header",
                span { class: "app-logo", "BookHub" }
            }
            main { class: "page-content",
                Outlet::<Route> {}
            }
            Toaster {}
        }
    }
}
