//! Manejadores HTTP: formulario, verificación de vida y subida de archivos.

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::metadata::{self, MetadataRecord};
use crate::storage::allowed_file;
use axum::Json;
use axum::extract::{Multipart, State};
use axum::response::Html;
use serde::Serialize;
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Página principal con el formulario de subida.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Verificación de vida del servicio.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "MetaLens",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Recibe un archivo multipart, lo guarda bajo una ruta única, extrae su
/// metadata y devuelve el registro resultante.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<MetadataRecord>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(|error| {
        ApiError::bad_request(format!("Invalid multipart form data: {error}"))
    })? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(|error| {
                ApiError::bad_request(format!("Invalid multipart form data: {error}"))
            })?;
            upload = Some((filename, data));
            break;
        }
    }

    let (filename, data) = upload.ok_or_else(|| ApiError::bad_request("No file provided"))?;

    if filename.is_empty() {
        return Err(ApiError::bad_request("No file selected"));
    }

    if !allowed_file(&filename) {
        return Err(ApiError::bad_request("File type not supported"));
    }

    log::info!("Archivo recibido: `{filename}` ({} bytes)", data.len());

    let stored = state
        .store
        .save(&filename, &data)
        .map_err(ApiError::internal)?;

    let record = metadata::collect_file_metadata(stored.path());

    // La limpieza del directorio es de mejor esfuerzo.
    if let Err(message) = stored.cleanup() {
        log::warn!("{message}");
    }

    Ok(Json(record))
}
