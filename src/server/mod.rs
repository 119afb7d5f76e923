//! Warehouse web server
//!
//! HTML pages and form handlers on top of a shared `WarehouseStore`, plus a
//! small JSON read API under `/api`.

pub mod api;
pub mod error;
pub mod handlers;
pub mod views;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::store::WarehouseStore;

pub use error::AppError;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub http_addr: String,
    /// HTTP port
    pub http_port: u16,
    /// Enable permissive CORS
    pub enable_cors: bool,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.http_addr, self.http_port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0".to_string(),
            http_port: 3000,
            enable_cors: true,
            static_dir: PathBuf::from("web"),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<WarehouseStore>>,
}

impl AppState {
    pub fn new(store: WarehouseStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, WarehouseStore>, AppError> {
        self.store.read().map_err(|_| {
            error!("Warehouse store lock poisoned");
            AppError::StoreUnavailable
        })
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, WarehouseStore>, AppError> {
        self.store.write().map_err(|_| {
            error!("Warehouse store lock poisoned");
            AppError::StoreUnavailable
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WarehouseStore::new())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

/// Build the full application router
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health_check))
        .route("/warehouses", get(api::list_warehouses))
        .route("/warehouses/:id", get(api::get_warehouse));

    let mut app = Router::new()
        .route("/", get(handlers::index))
        .route(
            "/warehouse/create",
            get(handlers::create_form).post(handlers::create_warehouse),
        )
        .route("/warehouse/:id", get(handlers::view_warehouse))
        .route(
            "/warehouse/:id/edit",
            get(handlers::edit_form).post(handlers::edit_warehouse),
        )
        .route("/warehouse/:id/add", post(handlers::add_stock))
        .route("/warehouse/:id/remove", post(handlers::remove_stock))
        .route("/warehouse/:id/delete", post(handlers::delete_warehouse))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Bind and serve until Ctrl+C
pub async fn start_server(config: ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let app = router(state, &config);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(addr = %addr, cors = config.enable_cors, "🚀 Warehouse server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
