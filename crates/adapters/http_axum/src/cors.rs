//! Cross-origin policy for the editor front-end.

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// Allows a single origin with credentials, any method and any header.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    allowed_origin: HeaderValue,
}

impl CorsConfig {
    /// Build a policy for `origin` (e.g. `http://localhost:5173`).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderValue`] if `origin` cannot be sent as a header.
    pub fn new(origin: &str) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allowed_origin: HeaderValue::from_str(origin)?,
        })
    }

    /// Turn the policy into a tower layer.
    ///
    /// Wildcards cannot be combined with credentials, so methods and headers
    /// mirror whatever the preflight request asks for.
    #[must_use]
    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(self.allowed_origin.clone())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}
