//! Superficie HTTP de MetaLens: rutas, estado compartido y arranque.

mod error;
mod handlers;


pub use error::{ApiError, ErrorResponse};

use crate::storage::UploadStore;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use std::path::PathBuf;
use std::sync::Arc;

/// Tamaño máximo aceptado para el cuerpo de una subida.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024; // 16 MiB

/// Parámetros de arranque del servidor.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
}

/// Estado compartido entre manejadores.
pub struct AppState {
    pub store: UploadStore,
}

impl AppState {
    pub fn new(upload_dir: PathBuf) -> Result<Self, String> {
        Ok(Self {
            store: UploadStore::new(upload_dir)?,
        })
    }
}

/// Construye el enrutador completo de la aplicación.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/upload", post(handlers::upload))
        .route("/api/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Arranca el servidor y atiende solicitudes hasta que el proceso termine.
pub async fn serve(config: ServerConfig) -> Result<(), String> {
    let state = Arc::new(AppState::new(config.upload_dir)?);
    let app = build_router(state);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|error| format!("No se pudo escuchar en `{address}`: {error}"))?;

    log::info!("MetaLens escuchando en http://{address}");
    axum::serve(listener, app)
        .await
        .map_err(|error| format!("El servidor terminó con un error: {error}"))
}
