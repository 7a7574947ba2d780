//! Almacenamiento temporal de los archivos subidos.
//!
//! Cada solicitud recibe un directorio propio bajo la raíz de subidas, de
//! modo que dos archivos con el mismo nombre nunca compiten por la misma
//! ruta. El directorio se elimina al terminar la extracción.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Extensiones aceptadas, verificadas antes de inspeccionar el contenido.
pub const ALLOWED_EXTENSIONS: [&str; 8] = [
    "pdf", "png", "jpg", "jpeg", "gif", "bmp", "tiff", "webp",
];

/// Indica si la extensión del nombre recibido está en la lista permitida.
pub fn allowed_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|extension| extension.to_string_lossy().to_lowercase())
        .is_some_and(|extension| ALLOWED_EXTENSIONS.contains(&extension.as_str()))
}

/// Reduce un nombre de archivo recibido a un nombre seguro para el disco:
/// sin separadores de ruta, sin puntos iniciales y solo con caracteres
/// ASCII alfanuméricos, guiones, guiones bajos y puntos.
pub fn sanitize_filename(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() || matches!(character, '.' | '-' | '_') {
                character
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = sanitized.trim_matches(|character| character == '.' || character == '_');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Raíz compartida bajo la cual se crean los directorios por solicitud.
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: PathBuf) -> Result<Self, String> {
        fs::create_dir_all(&root).map_err(|error| {
            format!(
                "No se pudo crear el directorio de subidas `{}`: {error}",
                root.display()
            )
        })?;
        Ok(Self { root })
    }

    /// Guarda los bytes recibidos bajo un directorio nuevo y único.
    pub fn save(&self, filename: &str, data: &[u8]) -> Result<StoredUpload, String> {
        let dir = tempfile::Builder::new()
            .prefix("upload-")
            .tempdir_in(&self.root)
            .map_err(|error| format!("could not allocate upload directory: {error}"))?;

        let path = dir.path().join(sanitize_filename(filename));
        fs::write(&path, data)
            .map_err(|error| format!("could not save uploaded file: {error}"))?;

        log::debug!("Archivo guardado en `{}`", path.display());
        Ok(StoredUpload { dir, path })
    }
}

/// Archivo guardado junto con el directorio que controla su vida útil.
pub struct StoredUpload {
    dir: TempDir,
    path: PathBuf,
}

impl StoredUpload {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Elimina el directorio de la solicitud. Si falla, `TempDir` lo
    /// reintentará de todas formas al soltarse.
    pub fn cleanup(self) -> Result<(), String> {
        self.dir
            .close()
            .map_err(|error| format!("No se pudo eliminar el directorio temporal: {error}"))
    }
}
