//! Reúne la metadata básica del archivo y la combina con la de su tipo.

use crate::extractors::extract_typed_metadata;
use crate::metadata::hashing::file_sha256;
use crate::metadata::mime::detect_mime_type;
use crate::metadata::record::MetadataRecord;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Construye el registro completo de metadata para un archivo en disco.
///
/// Siempre devuelve un registro. Si la consulta al sistema de archivos
/// falla, el registro queda reducido a un único campo `error` y no se
/// intenta ninguna extracción por tipo.
pub fn collect_file_metadata(path: &Path) -> MetadataRecord {
    let mut record = MetadataRecord::new();

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(error) => {
            record.insert(
                "error",
                format!("could not stat `{}`: {error}", path.display()),
            );
            return record;
        }
    };

    record.insert("file_size", metadata.len());

    // `created()` no está disponible en todas las plataformas; la fecha de
    // modificación sirve de respaldo.
    if let Ok(time) = metadata.created().or_else(|_| metadata.modified()) {
        record.insert("creation_date", format_timestamp(time));
    }
    if let Ok(time) = metadata.modified() {
        record.insert("modification_date", format_timestamp(time));
    }

    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    record.insert("file_path", absolute.display().to_string());

    match file_sha256(path) {
        Ok(digest) => record.insert("file_sha256", digest),
        Err(message) => log::debug!("Hash omitido: {message}"),
    }

    let mime_type = detect_mime_type(path);
    record.insert("mime_type", mime_type.as_str());

    if let Some(extension) = path.extension() {
        record.insert("file_extension", extension.to_string_lossy().to_lowercase());
    }

    record.merge(extract_typed_metadata(path, &mime_type));

    record
}

fn format_timestamp(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
