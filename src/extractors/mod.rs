//! Extractores de metadata específicos por tipo de archivo.

mod image;
mod pdf;


pub use image::extract_image_metadata;
pub use pdf::extract_pdf_metadata;

use crate::metadata::MetadataRecord;
use std::path::Path;

/// Selecciona el extractor según el tipo MIME detectado.
///
/// Los tipos sin extractor específico producen un registro con un único
/// campo `message`; ningún fallo de extracción escapa de esta capa.
pub fn extract_typed_metadata(path: &Path, mime_type: &str) -> MetadataRecord {
    if mime_type == "application/pdf" {
        extract_pdf_metadata(path)
    } else if mime_type.starts_with("image/") {
        extract_image_metadata(path)
    } else {
        let mut record = MetadataRecord::new();
        record.insert(
            "message",
            format!(
                "File type {mime_type} is supported but no specific metadata extraction implemented"
            ),
        );
        record
    }
}
