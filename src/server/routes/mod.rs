use crate::server::router::PagewrightState;
use axum::{
    Router,
    routing::{get, post},
};

mod extract;
mod generate;
mod status;
mod website;

pub fn router() -> Router<PagewrightState> {
    Router::new()
        .route(
            "/api/generate-website",
            post(generate::generate_website_handler),
        )
        .route("/api/website/{id}", get(website::website_handler))
        .route("/api/health", get(status::health_handler))
        .route("/api/config", get(status::config_handler))
        .route("/api/test-provider", post(status::test_provider_handler))
}
