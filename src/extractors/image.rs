//! Extracción de metadata de imágenes raster: dimensiones, modo y EXIF.

use crate::metadata::MetadataRecord;
use image::{ColorType, ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Etiquetas EXIF reportadas y la clave de registro que les corresponde.
const EXIF_FIELDS: [(exif::Tag, &str); 5] = [
    (exif::Tag::Make, "exif_make"),
    (exif::Tag::Model, "exif_model"),
    (exif::Tag::DateTime, "exif_datetime"),
    (exif::Tag::DateTimeOriginal, "exif_datetime_original"),
    (exif::Tag::Copyright, "exif_copyright"),
];

/// Lee dimensiones, modo de color, formato y etiquetas EXIF de una imagen.
///
/// Un fallo de decodificación no se propaga: queda registrado como campo
/// `image_error` y el resto del registro sigue su curso.
pub fn extract_image_metadata(path: &Path) -> MetadataRecord {
    let mut record = MetadataRecord::new();

    let reader = match ImageReader::open(path).and_then(|reader| reader.with_guessed_format()) {
        Ok(reader) => reader,
        Err(error) => {
            record.insert("image_error", format!("could not open image: {error}"));
            return record;
        }
    };

    let format = reader.format();
    let img = match reader.decode() {
        Ok(img) => img,
        Err(error) => {
            log::warn!(
                "No se pudo decodificar la imagen `{}`: {error}",
                path.display()
            );
            record.insert("image_error", format!("could not decode image: {error}"));
            return record;
        }
    };

    record.insert("image_width", img.width());
    record.insert("image_height", img.height());

    // El decodificador expande las paletas, así que el modo indexado se
    // consulta directamente en la cabecera PNG.
    match png_palette_entries(path, format) {
        Some(entries) => {
            record.insert("image_mode", "P");
            record.insert("image_palette_mode", "RGB");
            record.insert("image_palette_size", entries);
        }
        None => record.insert("image_mode", color_mode_label(img.color())),
    }

    if let Some(format) = format {
        record.insert("image_format", format_label(format));
    }

    record.merge(exif_fields(path));

    record
}

/// Lee la lista fija de etiquetas EXIF; las ausentes simplemente se omiten.
fn exif_fields(path: &Path) -> MetadataRecord {
    let mut record = MetadataRecord::new();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return record,
    };
    let mut bufreader = BufReader::new(&file);
    let exif = match exif::Reader::new().read_from_container(&mut bufreader) {
        Ok(exif) => exif,
        Err(_) => return record,
    };

    for (tag, field) in EXIF_FIELDS {
        if let Some(value) = exif.get_field(tag, exif::In::PRIMARY) {
            record.insert(field, value.display_value().to_string());
        }
    }

    record
}

/// Número de entradas de la paleta si la imagen es un PNG indexado.
fn png_palette_entries(path: &Path, format: Option<ImageFormat>) -> Option<usize> {
    if format != Some(ImageFormat::Png) {
        return None;
    }

    let file = File::open(path).ok()?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let reader = decoder.read_info().ok()?;
    let info = reader.info();
    if info.color_type != png::ColorType::Indexed {
        return None;
    }

    // El bloque PLTE guarda ternas RGB.
    info.palette.as_ref().map(|palette| palette.len() / 3)
}

fn color_mode_label(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "L16",
        ColorType::La16 => "LA16",
        ColorType::Rgb16 => "RGB16",
        ColorType::Rgba16 => "RGBA16",
        ColorType::Rgb32F => "RGB32F",
        ColorType::Rgba32F => "RGBA32F",
        _ => "UNKNOWN",
    }
}

fn format_label(format: ImageFormat) -> String {
    match format {
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        other => other
            .extensions_str()
            .first()
            .map(|extension| extension.to_uppercase())
            .unwrap_or_else(|| "UNKNOWN".to_string()),
    }
}
