//! Navigation middleware.
//!
//! Runs once per navigation, before the new route renders. It classifies the
//! path as infrastructure, public or protected and then lets the navigation
//! through unchanged. Access control is enforced by
//! [`ProtectedRoute`](crate::components::ProtectedRoute), not here.

use std::fmt;

use dioxus::logger::tracing;

use crate::utils::config::{INFRASTRUCTURE_PREFIXES, MATCHER_EXCLUDED_PATHS, PUBLIC_PATHS};

/// Errors raised while turning a raw URL into a navigation request
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// Neither a rooted path nor an absolute http(s) URL
    InvalidUrl(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidUrl(url) => write!(f, "Invalid navigation URL: {}", url),
        }
    }
}

impl std::error::Error for NavigationError {}

/// An incoming navigation, reduced to the only thing the middleware looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    path: String,
}

impl NavigationRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Build a request from a rooted path or an absolute `http(s)` URL.
    /// Query string and fragment are dropped.
    pub fn from_url(url: &str) -> Result<Self, NavigationError> {
        let rest = if url.starts_with('/') {
            url
        } else if let Some(after_scheme) = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
        {
            match after_scheme.find(['/', '?', '#']) {
                Some(idx) => &after_scheme[idx..],
                None => "",
            }
        } else {
            return Err(NavigationError::InvalidUrl(url.to_string()));
        };

        let path = rest.split(['?', '#']).next().unwrap_or_default();
        let path = if path.is_empty() { "/" } else { path };

        Ok(Self::new(path))
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Result of classifying one navigation; lives only for the duration of the check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteClassification {
    pub path: String,
    pub is_public: bool,
}

/// What the middleware tells the router to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiddlewareResponse {
    /// Forward the navigation unchanged
    PassThrough,
}

/// Build-time matcher deciding which paths reach the middleware at all
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    excluded: &'static [&'static str],
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            excluded: MATCHER_EXCLUDED_PATHS,
        }
    }
}

impl MatcherConfig {
    /// Returns true when the middleware should run for `path`
    pub fn matches(&self, path: &str) -> bool {
        if path.contains('.') {
            return false;
        }
        !self.excluded.iter().any(|excluded| is_same_or_below(path, excluded))
    }
}

fn is_same_or_below(path: &str, base: &str) -> bool {
    path == base
        || path
            .strip_prefix(base)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Assets, framework internals and anything that looks like a file
pub fn is_infrastructure_path(path: &str) -> bool {
    INFRASTRUCTURE_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || path.contains('.')
}

/// Exact match or sub-path of one of the public paths
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS
        .iter()
        .any(|public| is_same_or_below(path, public))
}

pub fn classify(path: &str) -> RouteClassification {
    RouteClassification {
        path: path.to_string(),
        is_public: is_public_path(path),
    }
}

/// Classify the request and let it through.
///
/// The classification is only logged: every request passes through whatever
/// its result.
pub fn middleware(request: &NavigationRequest) -> MiddlewareResponse {
    let path = request.path();

    if is_infrastructure_path(path) {
        tracing::trace!("Skipping infrastructure path {}", path);
        return MiddlewareResponse::PassThrough;
    }

    let classification = classify(path);
    tracing::debug!(
        "Navigation to {} classified as {}",
        classification.path,
        if classification.is_public { "public" } else { "protected" }
    );

    MiddlewareResponse::PassThrough
}

/// Entry point used by the router: applies the matcher, then the middleware
pub fn run_middleware(matcher: &MatcherConfig, request: &NavigationRequest) -> MiddlewareResponse {
    if !matcher.matches(request.path()) {
        return MiddlewareResponse::PassThrough;
    }
    middleware(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_path_check() {
        assert!(is_public_path("/login"));
        assert!(is_public_path("/registro"));
        assert!(is_public_path("/recuperar-password"));
        assert!(is_public_path("/login/sub"));
        assert!(!is_public_path("/dashboard"));
        assert!(!is_public_path("/loginx"));
        assert!(!is_public_path("/"));
    }

    #[test]
    fn test_every_request_passes_through() {
        for path in ["/login", "/registro", "/recuperar-password", "/login/sub", "/dashboard"] {
            let request = NavigationRequest::new(path);
            assert_eq!(middleware(&request), MiddlewareResponse::PassThrough);
        }
    }

    #[test]
    fn test_infrastructure_paths() {
        for path in ["/image.png", "/api/bookings", "/_next/data", "/static/app.js", "/favicon.ico", "/login.html"] {
            assert!(is_infrastructure_path(path), "{} should be infrastructure", path);
            assert_eq!(
                middleware(&NavigationRequest::new(path)),
                MiddlewareResponse::PassThrough
            );
        }
        assert!(!is_infrastructure_path("/login"));
        assert!(!is_infrastructure_path("/dashboard"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify("/registro"),
            RouteClassification { path: "/registro".to_string(), is_public: true }
        );
        assert!(!classify("/dashboard").is_public);
    }

    #[test]
    fn test_middleware_is_idempotent() {
        let request = NavigationRequest::new("/dashboard");
        assert_eq!(middleware(&request), middleware(&request));
        assert_eq!(classify(request.path()), classify(request.path()));
    }

    #[test]
    fn test_matcher_exclusions() {
        let matcher = MatcherConfig::default();
        assert!(!matcher.matches("/api"));
        assert!(!matcher.matches("/api/bookings"));
        assert!(!matcher.matches("/_next/static/chunk"));
        assert!(!matcher.matches("/_next/image"));
        assert!(!matcher.matches("/favicon.ico"));
        assert!(!matcher.matches("/logo.svg"));
        assert!(matcher.matches("/"));
        assert!(matcher.matches("/login"));
        assert!(matcher.matches("/apiary"));
        assert!(matcher.matches("/_next/data"));

        let request = NavigationRequest::new("/api/bookings");
        assert_eq!(run_middleware(&matcher, &request), MiddlewareResponse::PassThrough);
    }

    #[test]
    fn test_request_from_url() {
        assert_eq!(NavigationRequest::from_url("/login?next=/").unwrap().path(), "/login");
        assert_eq!(
            NavigationRequest::from_url("https://bookhub.example/registro#top").unwrap().path(),
            "/registro"
        );
        assert_eq!(NavigationRequest::from_url("http://bookhub.example").unwrap().path(), "/");
        assert_eq!(NavigationRequest::from_url("http://bookhub.example?x=1").unwrap().path(), "/");
        assert_eq!(
            NavigationRequest::from_url("bookhub.example/login"),
            Err(NavigationError::InvalidUrl("bookhub.example/login".to_string()))
        );
    }
}
