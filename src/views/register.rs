use dioxus::prelude::*;

use crate::components::Input;
use crate::contexts::{field_message, AuthContext, Field, FieldError, RegistrationForm, ToastQueue};
use crate::Route;

const AUTH_FORMS_CSS: Asset = asset!("/assets/styling/auth_forms.css");

#[component]
pub fn Register() -> Element {
    let mut auth = use_context::<AuthContext>();
    let mut toasts = use_context::<ToastQueue>();
    let mut form = use_signal(RegistrationForm::default);
    let mut error = use_signal(|| None::<FieldError>);

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let result = auth.sign_up(&form.read());
        match result {
            Ok(()) => {
                error.set(None);
                toasts.success("Cuenta creada correctamente");
                navigator().push(Route::Home {});
            }
            Err(err) => error.set(Some(err)),
        }
    };

    let values = form.read().clone();
    let message = move |field: Field| field_message(error.read().as_ref(), field);

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_FORMS_CSS }

        div { class: "auth-container",
            h1 { "Crear cuenta" }

            form { class: "auth-form", onsubmit: submit,
                Input {
                    id: "register-name",
                    label: "Nombre",
                    error: message(Field::Name),
                    r#type: "text",
                    value: "{values.name}",
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                Input {
                    id: "register-email",
                    label: "Correo electrónico",
                    error: message(Field::Email),
                    r#type: "email",
                    value: "{values.email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                Input {
                    id: "register-password",
                    label: "Contraseña",
                    error: message(Field::Password),
                    r#type: "password",
                    value: "{values.password}",
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                Input {
                    id: "register-password-confirmation",
                    label: "Confirmar contraseña",
                    error: message(Field::PasswordConfirmation),
                    r#type: "password",
                    value: "{values.password_confirmation}",
                    oninput: move |evt: FormEvent| form.write().password_confirmation = evt.value(),
                }

                button { r#type: "submit", class: "btn btn-primary", "Registrarme" }
            }

            div { class: "auth-links",
                Link { to: Route::Login {}, "¿Ya tienes cuenta? Inicia sesión" }
            }
        }
    }
}
