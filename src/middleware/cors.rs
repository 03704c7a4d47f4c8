use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};

// The conversion frontend and the browser extension call these APIs from
// arbitrary origins, so the whole surface stays open.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
        .max_age(Duration::from_secs(3600))
}
