//! Detección de tipos MIME mediante inferencia heurística sobre el contenido.

use infer::Infer;
use std::path::Path;

/// Tipo genérico cuando el contenido no coincide con ninguna firma conocida.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Detecta el tipo MIME del archivo a partir de sus bytes, nunca de la
/// extensión. El contenido irreconocible se reporta como binario genérico.
pub fn detect_mime_type(path: &Path) -> String {
    let infer = Infer::new();
    infer
        .get_from_path(path)
        .ok()
        .flatten()
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}
