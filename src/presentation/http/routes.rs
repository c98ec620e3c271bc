// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, system},
    middleware::{cors_layer, rate_limit_layer, security_header_layers},
    openapi,
};
use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Router-level switches that come from configuration rather than from services.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            rate_limit: true,
        }
    }
}

impl RouterOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit_enabled(),
        }
    }
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let api = Router::new()
        .route("/api/v1/articles/generate", post(articles::generate_article))
        .route("/api/v1/articles", get(articles::list_articles))
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route("/api/v1/articles/{id}", get(articles::get_article));

    let api = if options.rate_limit {
        api.layer(rate_limit_layer())
    } else {
        api
    };

    let (nosniff, frame_options) = security_header_layers();

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(system::health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(nosniff)
        .layer(frame_options)
        .layer(Extension(state))
}
