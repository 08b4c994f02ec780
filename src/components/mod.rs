//! Shared components: the building blocks pages are assembled from.

mod input;
pub use input::Input;

mod search_bar;
pub use search_bar::{SearchBar, SearchIntent, SearchRequest, SearchState};

mod category_filter;
pub use category_filter::{find_category, CategoryFilter};

mod toaster;
pub use toaster::Toaster;

mod protected_route;
pub use protected_route::ProtectedRoute;
