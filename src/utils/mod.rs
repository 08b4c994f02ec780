/// Configuration constants for the application
pub mod config {
    /// Paths reachable without a session
    pub const PUBLIC_PATHS: &[&str] = &["/login", "/registro", "/recuperar-password"];

    /// Prefixes the middleware treats as infrastructure and lets through untouched
    pub const INFRASTRUCTURE_PREFIXES: &[&str] = &["/api", "/_next", "/static", "/favicon"];

    /// Paths the middleware matcher never runs for (the path itself and anything below it)
    pub const MATCHER_EXCLUDED_PATHS: &[&str] = &["/api", "/_next/static", "/_next/image", "/favicon.ico"];

    /// Sentinel category id meaning "no filter"
    pub const ALL_CATEGORIES: &str = "all";

    /// Toasts kept on screen at once; the oldest is dropped first
    pub const MAX_TOASTS: usize = 4;

    /// Minimum length accepted for new passwords
    pub const MIN_PASSWORD_LENGTH: usize = 8;

    /// Document-level metadata emitted once by the root layout
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct SiteMetadata {
        pub title: &'static str,
        pub description: &'static str,
        pub keywords: &'static [&'static str],
        pub og_title: &'static str,
        pub og_description: &'static str,
        pub og_type: &'static str,
        pub locale: &'static str,
    }

    impl SiteMetadata {
        /// Keywords joined the way the `keywords` meta tag expects them
        pub fn keywords_content(&self) -> String {
            self.keywords.join(", ")
        }
    }

    pub const SITE_METADATA: SiteMetadata = SiteMetadata {
        title: "BookHub - Reserva lo que necesites",
        description: "Encuentra y reserva restaurantes, hoteles, spas, eventos y mucho más en un solo lugar.",
        keywords: &["reservas", "booking", "restaurantes", "hoteles", "spa", "eventos"],
        og_title: "BookHub",
        og_description: "Tu plataforma de reservas: busca, compara y reserva en segundos.",
        og_type: "website",
        locale: "es_ES",
    };
}
