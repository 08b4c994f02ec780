use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "not-found",
            h1 { "Página no encontrada" }
            p { "No existe ninguna página en {path}" }
            Link { to: Route::Home {}, "Volver al inicio" }
        }
    }
}
