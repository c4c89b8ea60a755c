use tower_http::cors::{Any, CorsLayer};

/// The hiring dashboard and careers page are served from other origins,
/// so the API answers anyone.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}
