use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::Input;
use crate::contexts::{field_message, AuthContext, Field, FieldError, ToastQueue};
use crate::Route;

const AUTH_FORMS_CSS: Asset = asset!("/assets/styling/auth_forms.css");

#[component]
pub fn Login() -> Element {
    let mut auth = use_context::<AuthContext>();
    let mut toasts = use_context::<ToastQueue>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<FieldError>);
    // Mounted email field, focused again when the email is rejected
    let mut email_field = use_signal(|| None::<Rc<MountedData>>);

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        match auth.sign_in(&email.read(), &password.read()) {
            Ok(()) => {
                error.set(None);
                toasts.success("¡Bienvenido de nuevo!");
                navigator().push(Route::Home {});
            }
            Err(err) => {
                toasts.error("No se pudo iniciar sesión");
                if err.field == Field::Email {
                    if let Some(field) = email_field() {
                        spawn(async move {
                            let _ = field.set_focus(true).await;
                        });
                    }
                }
                error.set(Some(err));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_FORMS_CSS }

        div { class: "auth-container",
            h1 { "Iniciar sesión" }

            form { class: "auth-form", onsubmit: submit,
                Input {
                    id: "login-email",
                    label: "Correo electrónico",
                    error: field_message(error.read().as_ref(), Field::Email),
                    r#type: "email",
                    placeholder: "tu@correo.com",
                    value: "{email}",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                    onmounted: move |evt: MountedEvent| email_field.set(Some(evt.data())),
                }
                Input {
                    id: "login-password",
                    label: "Contraseña",
                    error: field_message(error.read().as_ref(), Field::Password),
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button { r#type: "submit", class: "btn btn-primary", "Entrar" }
            }

            div { class: "auth-links",
                Link { to: Route::RecoverPassword {}, "¿Olvidaste tu contraseña?" }
                Link { to: Route::Register {}, "Crear una cuenta" }
            }
        }
    }
}
