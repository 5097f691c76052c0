//! Taskboard Server
//!
//! A minimal HTTP service exposing CRUD over tasks, projects, and users,
//! backed by process-local in-memory storage. Nothing survives a restart.

mod error;
mod handlers;
mod storage;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use taskboard_types::{Project, Task, User};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use storage::Repository;

/// Application state shared across handlers.
///
/// One repository instance per record kind, constructed at startup and
/// living for the whole process. The three stores are fully independent;
/// no operation ever touches two of them.
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<Repository<Task>>,
    pub projects: Arc<Repository<Project>>,
    pub users: Arc<Repository<User>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(Repository::new()),
            projects: Arc::new(Repository::new()),
            users: Arc::new(Repository::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Taskboard Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = load_config();
    info!("Config loaded: bind={}", config.bind_address);

    let state = AppState::new();
    let app = router(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/tasks/",
            get(handlers::tasks::list).post(handlers::tasks::create),
        )
        .route(
            "/tasks/:id",
            get(handlers::tasks::read)
                .put(handlers::tasks::update)
                .delete(handlers::tasks::delete),
        )
        .route(
            "/projects/",
            get(handlers::projects::list).post(handlers::projects::create),
        )
        .route(
            "/users/",
            get(handlers::users::list).post(handlers::users::create),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Clone)]
struct Config {
    bind_address: String,
}

fn load_config() -> Config {
    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    Config { bind_address }
}
