// Context modules for application state management
pub mod auth;
pub mod error;
pub mod toast;

pub use auth::*;
pub use error::*;
pub use toast::*;
