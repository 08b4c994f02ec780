use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::error::{Field, FieldError, FieldResult, FormError, FormResult};
use crate::utils::config::MIN_PASSWORD_LENGTH;

/// The signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub email: String,
    pub name: Option<String>,
}

/// Values collected by the registration page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Context holding the authentication state of the page session.
///
/// Provided by the root layout and read by every page that needs to know
/// who is signed in. There is no backend behind it: credentials are only
/// checked for presence and shape.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    pub session: Signal<Option<Session>>,
}

impl AuthContext {
    /// Must be called from inside a component scope
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn current_user(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> FieldResult<()> {
        validate_credentials(email, password)?;
        tracing::info!("Signed in as {}", email.trim());
        self.session.set(Some(Session {
            email: email.trim().to_string(),
            name: None,
        }));
        Ok(())
    }

    pub fn sign_up(&mut self, form: &RegistrationForm) -> FieldResult<()> {
        validate_registration(form)?;
        tracing::info!("Registered {}", form.email.trim());
        self.session.set(Some(Session {
            email: form.email.trim().to_string(),
            name: Some(form.name.trim().to_string()),
        }));
        Ok(())
    }

    pub fn request_password_reset(&self, email: &str) -> FieldResult<()> {
        validate_email(email).map_err(|e| FieldError::new(Field::Email, e))?;
        tracing::info!("Password reset requested for {}", email.trim());
        Ok(())
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!("Signed out {}", session.email);
        }
    }
}

fn validate_email(email: &str) -> FormResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::Required);
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') && !domain.starts_with('.') => Ok(()),
        _ => Err(FormError::InvalidEmail),
    }
}

/// Presence and shape checks for the login form
pub fn validate_credentials(email: &str, password: &str) -> FieldResult<()> {
    validate_email(email).map_err(|e| FieldError::new(Field::Email, e))?;
    if password.is_empty() {
        return Err(FieldError::new(Field::Password, FormError::Required));
    }
    Ok(())
}

/// Checks for the registration form, reported field by field in form order
pub fn validate_registration(form: &RegistrationForm) -> FieldResult<()> {
    if form.name.trim().is_empty() {
        return Err(FieldError::new(Field::Name, FormError::Required));
    }
    validate_email(&form.email).map_err(|e| FieldError::new(Field::Email, e))?;
    if form.password.is_empty() {
        return Err(FieldError::new(Field::Password, FormError::Required));
    }
    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::new(
            Field::Password,
            FormError::PasswordTooShort { min: MIN_PASSWORD_LENGTH },
        ));
    }
    if form.password != form.password_confirmation {
        return Err(FieldError::new(Field::PasswordConfirmation, FormError::PasswordMismatch));
    }
    Ok(())
}
