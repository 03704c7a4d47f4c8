use axum::{http::header, response::IntoResponse};

use crate::config::get_config;

const DISALLOWED: &[&str] = &[
    "/favicon.ico",
    "/manifest.json",
    "/api/",
    "/admin/",
    "/icons/",
];

pub async fn robots_txt() -> impl IntoResponse {
    let config = get_config();

    let mut body = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED {
        body.push_str("Disallow: ");
        body.push_str(path);
        body.push('\n');
    }
    body.push_str(&format!("\nSitemap: {}/sitemap.xml\n", config.base_url));

    ([(header::CONTENT_TYPE, "text/plain")], body)
}
