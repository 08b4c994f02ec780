use dioxus::prelude::*;

use crate::contexts::ToastQueue;

/// Renders the global toast queue. Clicking a toast dismisses it.
#[component]
pub fn Toaster() -> Element {
    let mut queue = use_context::<ToastQueue>();

    rsx! {
        div { class: "toaster", aria_live: "polite",
            for toast in queue.toasts.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    role: "status",
                    onclick: move |_| queue.dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
