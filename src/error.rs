use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressorError {
    #[error("Image path is not a regular file: {0}")]
    ImageIncorrect(PathBuf),

    #[error("Image file is not readable: {0}: {1}")]
    ImageNotReadable(PathBuf, std::io::Error),

    #[error("Invalid optimization level: {0}. Must be between 0 and 100")]
    InvalidLevel(u8),

    #[error("HTTP transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, CompressorError>;
