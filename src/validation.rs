use crate::error::{CompressorError, Result};
use crate::request::FilePart;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

/// Checks that `path` names an existing, regular, readable file.
///
/// Directories, dangling links and missing paths are all `ImageIncorrect`;
/// a file that cannot be opened for reading is `ImageNotReadable`.
pub fn validate_image_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(CompressorError::ImageIncorrect(path.to_path_buf()));
    }

    File::open(path).map_err(|e| CompressorError::ImageNotReadable(path.to_path_buf(), e))?;

    Ok(())
}

/// Validates `path` and reads it into an upload part.
///
/// The handle is dropped before this returns, whatever the outcome.
pub fn read_image(path: &Path) -> Result<FilePart> {
    validate_image_path(path)?;

    let not_readable = |e| CompressorError::ImageNotReadable(path.to_path_buf(), e);

    let size = fs::metadata(path).map_err(not_readable)?.len();
    let file = File::open(path).map_err(not_readable)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(size as usize);
    reader.read_to_end(&mut bytes).map_err(not_readable)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    Ok(FilePart { file_name, bytes })
}
