use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    id: Option<String>,
    label: Option<String>,
    error: Option<String>,
    #[props(into, default = "input-field".to_string())]
    class: String,
    oninput: Option<EventHandler<FormEvent>>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
    /// Receives the mounted field so the caller can focus it
    onmounted: Option<EventHandler<MountedEvent>>,
    #[props(extends = input)]
    attributes: Vec<Attribute>,
}

/// Error text to show, if any. Empty strings count as no error.
fn visible_error(error: Option<&str>) -> Option<&str> {
    error.filter(|e| !e.is_empty())
}

/// Labeled text field with an optional error line underneath
#[component]
pub fn Input(props: InputProps) -> Element {
    let error = visible_error(props.error.as_deref()).map(str::to_string);
    let field_class = if error.is_some() {
        format!("{} has-error", props.class)
    } else {
        props.class.clone()
    };

    rsx! {
        div { class: "input-group",
            if let Some(text) = &props.label {
                label {
                    class: "input-label",
                    r#for: props.id.clone(),
                    "{text}"
                }
            }
            input {
                id: props.id.clone(),
                class: "{field_class}",
                oninput: move |evt| {
                    if let Some(handler) = &props.oninput {
                        handler.call(evt);
                    }
                },
                onkeydown: move |evt| {
                    if let Some(handler) = &props.onkeydown {
                        handler.call(evt);
                    }
                },
                onmounted: move |evt| {
                    if let Some(handler) = &props.onmounted {
                        handler.call(evt);
                    }
                },
                ..props.attributes,
            }
            if let Some(error) = error {
                p { class: "input-error", role: "alert", "{error}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn with_error() -> Element {
        rsx! {
            Input {
                id: "email",
                label: "Correo electrónico",
                error: "Campo requerido",
                r#type: "email",
                value: "",
            }
        }
    }

    fn without_error() -> Element {
        rsx! {
            Input {
                id: "email",
                label: "Correo electrónico",
                r#type: "email",
                value: "ana@bookhub.es",
            }
        }
    }

    fn with_empty_error() -> Element {
        rsx! {
            Input { id: "email", error: "" }
        }
    }

    #[test]
    fn test_error_rendered_verbatim() {
        let html = render(with_error);
        assert!(html.contains(r#"<p class="input-error" role="alert">Campo requerido</p>"#));
        assert!(html.contains("has-error"));
    }

    #[test]
    fn test_no_error_element_without_error() {
        assert!(!render(without_error).contains("input-error"));
        assert!(!render(with_empty_error).contains("input-error"));
    }

    #[test]
    fn test_label_bound_to_field() {
        let html = render(without_error);
        assert!(html.contains(r#"for="email""#));
        assert!(html.contains(r#"id="email""#));
        assert!(html.contains("Correo electrónico"));
        assert!(html.contains(r#"value="ana@bookhub.es""#));
    }

    fn label_without_id() -> Element {
        rsx! {
            Input { label: "Ubicación" }
        }
    }

    #[test]
    fn test_label_without_id_has_no_for() {
        let html = render(label_without_id);
        assert!(html.contains("Ubicación"));
        assert!(!html.contains("for="));
    }

    #[test]
    fn test_visible_error() {
        assert_eq!(visible_error(Some("Campo requerido")), Some("Campo requerido"));
        assert_eq!(visible_error(Some("")), None);
        assert_eq!(visible_error(None), None);
    }
}
