use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, IntoMakeService};
use axum::{Router, Server};
use hyper::server::conn::AddrIncoming;
use hyper::{Body, Request};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::{Backend, DatabaseSettings, Settings};
use crate::routes::{
    create_newsletter, delete_newsletter, get_newsletter, index, list_newsletters,
    update_newsletter, Links,
};
use crate::store::{InMemoryStore, NewsletterStore, PostgresStore};

pub type AppServer = Server<AddrIncoming, IntoMakeService<Router>>;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NewsletterStore>,
    pub links: Links,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health_check", get(|| async {}))
        .route(
            "/newsletters",
            get(list_newsletters).post(create_newsletter),
        )
        .route(
            "/newsletters/:id",
            get(get_newsletter)
                .patch(update_newsletter)
                .delete(delete_newsletter),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|value| value.to_str().ok())
                            .unwrap_or_default();
                        tracing::info_span!(
                            "request",
                            %request_id,
                            method = %request.method(),
                            uri = %request.uri(),
                            version = ?request.version(),
                        )
                    }),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

pub fn run(address: SocketAddr, state: AppState) -> hyper::Result<AppServer> {
    let server = Server::try_bind(&address)?.serve(router(state).into_make_service());
    Ok(server)
}

pub async fn build(config: &Settings) -> anyhow::Result<AppServer> {
    let store: Arc<dyn NewsletterStore> = match config.database.backend {
        Backend::Postgres => {
            let store = PostgresStore::new(get_db_pool(&config.database));
            store
                .run_migrations()
                .await
                .context("Failed to run database migrations")?;
            Arc::new(store)
        },
        Backend::Memory => {
            tracing::warn!("Using the in-memory store, data will not outlive the process");
            Arc::new(InMemoryStore::new())
        },
    };
    let state = AppState {
        store,
        links: Links::new(&config.application.base_url),
    };

    let address: SocketAddr = config
        .application
        .address()
        .parse()
        .context("Invalid application host or port")?;
    let server = run(address, state).context("Failed to bind the application address")?;
    Ok(server)
}

pub fn get_db_pool(config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(config.with_db())
}
