//! Cálculo del hash de contenido para los archivos subidos.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Devuelve el hash SHA-256 del archivo en hexadecimal.
pub fn file_sha256(path: &Path) -> Result<String, String> {
    let mut file = File::open(path)
        .map_err(|error| format!("No se pudo abrir `{}`: {error}", path.display()))?;

    let mut hasher = Sha256::new();
    let mut buffer = [0_u8; 8192];
    loop {
        match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(bytes_read) => hasher.update(&buffer[..bytes_read]),
            Err(error) => {
                return Err(format!("No se pudo leer `{}`: {error}", path.display()));
            }
        }
    }

    let digest = hasher.finalize();
    Ok(format!("{:x}", digest))
}
