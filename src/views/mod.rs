//! The views module contains the components for all Layouts and Routes for our app.
//! Each submodule corresponds to a specific section of the application,
//! encapsulating the layout and routing logic for that section.

mod root_layout;
pub use root_layout::RootLayout;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod recover_password;
pub use recover_password::RecoverPassword;

mod not_found;
pub use not_found::NotFound;
