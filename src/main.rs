use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use trevnoctilla_backend::{
    config::{get_config, init_config},
    middleware, routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new();

    let base_routes = Router::new()
        .route("/health", get(routes::health::health))
        .route("/robots.txt", get(routes::meta::robots_txt));

    let public_api = Router::new()
        .route(
            "/api/payments/payfast/initiate",
            post(routes::payment::initiate_payment),
        )
        .route(
            "/api/payments/payfast/notify",
            post(routes::payment::handle_itn).get(routes::payment::handle_itn_get),
        )
        .route("/api/payments/debug", get(routes::payment::get_last_itn))
        .route("/api/logo", get(routes::assets::serve_logo))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let admin_api = Router::new()
        .route(
            "/api/admin/ad-service/status",
            get(routes::admin::ad_service_status),
        )
        .route(
            "/api/admin/ad-service/start",
            post(routes::admin::start_ad_service),
        )
        .route(
            "/api/admin/ad-service/stop",
            post(routes::admin::stop_ad_service),
        )
        .route(
            "/api/admin/ad-service/reset",
            post(routes::admin::reset_ad_service),
        )
        .route("/api/admin/backup/status", get(routes::admin::backup_status))
        .route("/api/admin/backup/run", post(routes::admin::run_backup))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.admin_rps),
            middleware::rate_limit::rps_middleware,
        ));

    info!("Serving static assets from: {}", config.public_dir);

    let app = base_routes
        .merge(public_api)
        .merge(admin_api)
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .with_state(app_state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
