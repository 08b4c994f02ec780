use dioxus::prelude::*;

use crate::components::Input;
use crate::contexts::{field_message, AuthContext, Field, FieldError, ToastQueue};
use crate::Route;

const AUTH_FORMS_CSS: Asset = asset!("/assets/styling/auth_forms.css");

#[component]
pub fn RecoverPassword() -> Element {
    let auth = use_context::<AuthContext>();
    let mut toasts = use_context::<ToastQueue>();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<FieldError>);

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        match auth.request_password_reset(&email.read()) {
            Ok(()) => {
                error.set(None);
                toasts.success("Te enviamos un enlace para restablecer tu contraseña");
            }
            Err(err) => error.set(Some(err)),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_FORMS_CSS }

        div { class: "auth-container",
            h1 { "Recuperar contraseña" }
            p { class: "auth-hint", "Escribe tu correo y te enviaremos un enlace para crear una nueva." }

            form { class: "auth-form", onsubmit: submit,
                Input {
                    id: "recover-email",
                    label: "Correo electrónico",
                    error: field_message(error.read().as_ref(), Field::Email),
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                button { r#type: "submit", class: "btn btn-primary", "Enviar enlace" }
            }

            div { class: "auth-links",
                Link { to: Route::Login {}, "Volver a iniciar sesión" }
            }
        }
    }
}
