use std::fmt;

/// Errors shown next to form fields
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// A mandatory field was left empty
    Required,
    /// The email address is not shaped like one
    InvalidEmail,
    /// New password shorter than the configured minimum
    PasswordTooShort { min: usize },
    /// Password confirmation differs from the password
    PasswordMismatch,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Required => write!(f, "Campo requerido"),
            FormError::InvalidEmail => write!(f, "Correo electrónico no válido"),
            FormError::PasswordTooShort { min } => {
                write!(f, "La contraseña debe tener al menos {} caracteres", min)
            }
            FormError::PasswordMismatch => write!(f, "Las contraseñas no coinciden"),
        }
    }
}

impl std::error::Error for FormError {}

/// Result type for form submissions
pub type FormResult<T> = Result<T, FormError>;

/// A form error tied to the field that caused it
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub error: FormError,
}

impl FieldError {
    pub fn new(field: Field, error: FormError) -> Self {
        Self { field, error }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.field, self.error)
    }
}

impl std::error::Error for FieldError {}

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

/// Result type for operations that validate several fields
pub type FieldResult<T> = Result<T, FieldError>;

/// Message to show under `field`, if the current error belongs to it
pub fn field_message(error: Option<&FieldError>, field: Field) -> Option<String> {
    error
        .filter(|e| e.field == field)
        .map(|e| e.error.to_string())
}
