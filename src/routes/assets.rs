use std::path::Path;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;
use tracing::error;

use crate::config::get_config;

/// Streams the site logo with a long-lived immutable cache header.
pub async fn serve_logo() -> Response {
    let config = get_config();
    let logo_path = Path::new(&config.public_dir).join("logo.png");

    match tokio::fs::File::open(&logo_path).await {
        Ok(file) => {
            let stream = ReaderStream::new(file);
            (
                [
                    (header::CONTENT_TYPE, "image/png"),
                    (
                        header::CACHE_CONTROL,
                        "public, max-age=31536000, immutable",
                    ),
                ],
                Body::from_stream(stream),
            )
                .into_response()
        }
        Err(e) => {
            error!(path = %logo_path.display(), error = ?e, "Error serving logo");
            (StatusCode::NOT_FOUND, "Logo not found").into_response()
        }
    }
}
