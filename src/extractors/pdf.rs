//! Extracción de metadata en PDFs mediante lectura del diccionario Info.

use crate::metadata::MetadataRecord;
use lopdf::{Dictionary, Document, Object};
use std::path::Path;

/// Campos del diccionario Info y la clave de registro que les corresponde.
const INFO_FIELDS: [(&[u8], &str); 7] = [
    (b"Author", "pdf_author"),
    (b"Creator", "pdf_creator"),
    (b"Producer", "pdf_producer"),
    (b"Title", "pdf_title"),
    (b"Subject", "pdf_subject"),
    (b"CreationDate", "pdf_creation_date"),
    (b"ModDate", "pdf_modification_date"),
];

/// Valor centinela cuando el diccionario existe pero el campo está ausente.
const UNKNOWN: &str = "Unknown";

/// Lee el diccionario Info y el número de páginas de un documento PDF.
///
/// Un fallo estructural del documento no se propaga: queda registrado como
/// campo `pdf_error` y el resto del registro sigue su curso.
pub fn extract_pdf_metadata(path: &Path) -> MetadataRecord {
    let mut record = MetadataRecord::new();

    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(error) => {
            log::warn!("No se pudo leer el PDF `{}`: {error}", path.display());
            record.insert(
                "pdf_error",
                format!("could not parse PDF document: {error}"),
            );
            return record;
        }
    };

    if let Some(info) = info_dictionary(&doc) {
        for (key, field) in INFO_FIELDS {
            let value = info
                .get(key)
                .ok()
                .and_then(|object| object_to_string(&doc, object))
                .unwrap_or_else(|| UNKNOWN.to_string());
            record.insert(field, value);
        }
    }

    record.insert("pdf_page_count", doc.get_pages().len());

    record
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let info = doc.trailer.get(b"Info").ok()?;
    deref_dictionary(doc, info)
}

fn deref_dictionary<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn object_to_string(doc: &Document, object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).trim().to_string()),
        Object::Name(name) => Some(String::from_utf8_lossy(name).trim().to_string()),
        Object::Reference(reference) => doc
            .get_object(*reference)
            .ok()
            .and_then(|inner| object_to_string(doc, inner)),
        _ => None,
    }
}
