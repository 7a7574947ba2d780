//! Recolección de metadata básica del sistema de archivos en un registro plano.

mod collector;
mod hashing;
mod mime;
mod record;


pub use collector::collect_file_metadata;
pub use mime::{FALLBACK_MIME, detect_mime_type};
pub use record::{MetadataRecord, MetadataValue};
