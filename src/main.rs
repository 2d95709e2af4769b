//! Crowd Lobbying Backend
//!
//! Campaign sites on `{campaign}.{domain}` where visitors send arguments to
//! politicians, confirmed by email. Persistence is SQLite.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod locale;
mod mail;
mod models;
mod pages;
mod token;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use mail::{LogMailer, Mailer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
    pub mailer: Arc<dyn Mailer>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Crowd Lobbying Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Campaign domain: {}", config.domain);
    tracing::info!("Default locale: {}", config.default_locale);

    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (LOBBY_API_PSK). Admin API is unprotected!");
    }

    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
        mailer: Arc::new(LogMailer),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let psk = state.config.api_psk.clone();
    let default_locale = state.config.default_locale;

    // Campaign pages, always below a locale segment
    let page_routes = Router::new()
        .route("/{locale}", get(pages::index))
        .route("/{locale}/", get(pages::index))
        .route("/{locale}/statements", get(pages::statements))
        .route("/{locale}/statement/{id}", get(pages::statement))
        .route("/{locale}/thanks/{id}", get(pages::thanks))
        .route("/{locale}/confirm/{id}", get(pages::confirm))
        .route(
            "/{locale}/lobby/{slug}",
            get(pages::lobby).post(pages::lobby_submit),
        )
        .route(
            "/{locale}/lobby/{slug}/confirm/{token}",
            get(pages::lobby_confirm),
        )
        .route("/{locale}/{region}", get(pages::region))
        .fallback(pages::not_found)
        .layer(middleware::from_fn(move |req, next| {
            locale::locale_redirect_layer(default_locale, req, next)
        }));

    // Admin API
    let api_routes = Router::new()
        .route("/regions", get(api::list_regions).post(api::create_region))
        .route(
            "/campaigns",
            get(api::list_campaigns).post(api::create_campaign),
        )
        .route(
            "/campaigns/{slug}/arguments",
            get(api::list_arguments).post(api::create_argument),
        )
        .route("/campaigns/{slug}/wip", get(api::list_wip_counts))
        .route(
            "/campaigns/{slug}/wip/{politician}",
            put(api::upsert_wip_count),
        )
        .route("/campaigns/{slug}/entries", get(api::export_entries))
        .route(
            "/politicians",
            get(api::list_politicians).post(api::create_politician),
        )
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(page_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
