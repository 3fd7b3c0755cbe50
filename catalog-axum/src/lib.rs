#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod dealer_routes;
mod error;
mod review_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json};
use catalog_core::ports::{Application, DealershipRepository, ReviewRepository};
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Greeting served at the root
async fn welcome() -> String {
    "Welcome to the Dealership Catalog API".to_string()
}

/// Construct the full API router with the given state and config.
///
/// Also returns the OpenAPI document describing the routes, which is served
/// under `/docs` as well.
pub fn router<T: ApiApplication>(state: T, config: &AxumConfig) -> (axum::Router, Arc<OpenApi>) {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/", get(welcome))
        .api_route("/health", get(health_check))
        .merge(review_routes::router())
        .merge(dealer_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs);

    let api = Arc::new(api);
    let router = router.layer(Extension(api.clone())).with_state(state);

    let router = if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    (router, api)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let (service, _) = router(app, &config);
    axum::serve(listener, service).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication:
    Clone
    + Send
    + Sync
    + 'static
    + Application<
        Repository: Clone + Send + Sync + 'static + ReviewRepository + DealershipRepository,
    >
{
}

// this is the blanket implementation
impl<T: Clone + Send + Sync + 'static> ApiApplication for T where
    T: Application<
            Repository: Clone + Send + Sync + 'static + ReviewRepository + DealershipRepository,
        >
{
}
