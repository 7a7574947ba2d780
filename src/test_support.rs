//! Construcción de archivos de muestra para las pruebas.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Escribe un PDF de una página; `info` agrega un diccionario Info con
/// título y autor.
pub fn write_sample_pdf(path: &Path, info: Option<(&str, &str)>) -> Result<(), Box<dyn Error>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal("Documento de prueba")]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1_i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some((title, author)) = info {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
            "Author" => Object::string_literal(author),
        });
        doc.trailer.set("Info", info_id);
    }

    doc.compress();
    doc.save(path)?;
    Ok(())
}

/// Escribe un PNG RGB uniforme con las dimensiones pedidas.
pub fn write_rgb_png(path: &Path, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
    let buffer = image::ImageBuffer::from_pixel(width, height, image::Rgb([200_u8, 60, 30]));
    buffer.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Escribe un PNG indexado de 2x2 con una paleta de cuatro entradas.
pub fn write_indexed_png(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), 2, 2);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0]);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&[0, 1, 2, 3])?;
    writer.finish()?;
    Ok(())
}

/// Escribe un TIFF RGB de 2x2 cuyo IFD principal lleva las etiquetas EXIF
/// Make, Model, DateTime y Copyright (DateTimeOriginal queda ausente).
pub fn write_tiff_with_exif(path: &Path) -> Result<(), Box<dyn Error>> {
    const SHORT: u16 = 3;
    const LONG: u16 = 4;
    const ASCII: u16 = 2;

    // Desplazamientos precalculados: cabecera (8) + IFD de 13 entradas
    // (2 + 13 * 12 + 4 = 162) = 170, y de ahí los valores externos en orden.
    const BITS_OFFSET: u32 = 170;
    const MAKE_OFFSET: u32 = 176;
    const MODEL_OFFSET: u32 = 184;
    const DATETIME_OFFSET: u32 = 192;
    const COPYRIGHT_OFFSET: u32 = 212;
    const STRIP_OFFSET: u32 = 226;

    let mut bytes: Vec<u8> = Vec::new();
    bytes.extend_from_slice(b"II");
    bytes.extend_from_slice(&42_u16.to_le_bytes());
    bytes.extend_from_slice(&8_u32.to_le_bytes());

    bytes.extend_from_slice(&13_u16.to_le_bytes());
    // Las entradas van ordenadas por número de etiqueta.
    ifd_entry(&mut bytes, 256, SHORT, 1, 2); // ImageWidth
    ifd_entry(&mut bytes, 257, SHORT, 1, 2); // ImageLength
    ifd_entry(&mut bytes, 258, SHORT, 3, BITS_OFFSET); // BitsPerSample
    ifd_entry(&mut bytes, 259, SHORT, 1, 1); // Compression: ninguna
    ifd_entry(&mut bytes, 262, SHORT, 1, 2); // PhotometricInterpretation: RGB
    ifd_entry(&mut bytes, 271, ASCII, 8, MAKE_OFFSET); // Make
    ifd_entry(&mut bytes, 272, ASCII, 8, MODEL_OFFSET); // Model
    ifd_entry(&mut bytes, 273, LONG, 1, STRIP_OFFSET); // StripOffsets
    ifd_entry(&mut bytes, 277, SHORT, 1, 3); // SamplesPerPixel
    ifd_entry(&mut bytes, 278, SHORT, 1, 2); // RowsPerStrip
    ifd_entry(&mut bytes, 279, LONG, 1, 12); // StripByteCounts
    ifd_entry(&mut bytes, 306, ASCII, 20, DATETIME_OFFSET); // DateTime
    ifd_entry(&mut bytes, 33432, ASCII, 14, COPYRIGHT_OFFSET); // Copyright
    bytes.extend_from_slice(&0_u32.to_le_bytes());

    for _ in 0..3 {
        bytes.extend_from_slice(&8_u16.to_le_bytes());
    }
    bytes.extend_from_slice(b"TestCam\0");
    bytes.extend_from_slice(b"Model X\0");
    bytes.extend_from_slice(b"2024:01:01 00:00:00\0");
    bytes.extend_from_slice(b"Metadata Labs\0");
    bytes.extend_from_slice(&[0x7f_u8; 12]);

    std::fs::write(path, bytes)?;
    Ok(())
}

fn ifd_entry(bytes: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: u32) {
    bytes.extend_from_slice(&tag.to_le_bytes());
    bytes.extend_from_slice(&kind.to_le_bytes());
    bytes.extend_from_slice(&count.to_le_bytes());
    bytes.extend_from_slice(&value.to_le_bytes());
}
