//! Aula Backend
//!
//! REST backend for an educational platform: contents, courses, evaluations and
//! users, persisted in SQLite.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod services;

use std::sync::Arc;

use axum::{extract::FromRef, routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::{RecordStore, Repository, UserStore};
use models::{Contenido, Curso, Evaluacion, User};
use services::{ResourceService, UserService};

/// Application state shared across all handlers.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub contenidos: ResourceService<Contenido>,
    pub cursos: ResourceService<Curso>,
    pub evaluaciones: ResourceService<Evaluacion>,
    pub users: UserService,
}

impl AppState {
    /// Build every service on top of one backing store.
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: RecordStore<Contenido>
            + RecordStore<Curso>
            + RecordStore<Evaluacion>
            + UserStore
            + 'static,
    {
        Self {
            contenidos: ResourceService::<Contenido>::new(store.clone()),
            cursos: ResourceService::<Curso>::new(store.clone()),
            evaluaciones: ResourceService::<Evaluacion>::new(store.clone()),
            users: UserService::new(store),
        }
    }
}

impl FromRef<AppState> for ResourceService<User> {
    fn from_ref(state: &AppState) -> Self {
        state.users.records().clone()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Aula Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    let state = AppState::new(repo);

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/contenidos", api::resource_routes::<Contenido>())
        .nest("/cursos", api::resource_routes::<Curso>())
        .nest("/evaluaciones", api::resource_routes::<Evaluacion>())
        .nest(
            "/users",
            api::resource_routes::<User>().route("/login", post(api::login)),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api/v2", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
