use std::time::Duration;

pub const API_ENDPOINT: &str = "https://helloacm.com/api/images-compressor";

pub const OPTIMIZE_PATH: &str = "/";
pub const CHECK_PATH: &str = "/check/";
pub const LIST_PATH: &str = "/list/";
pub const DELETE_PATH: &str = "/delete/";

pub const DEFAULT_LEVEL: u8 = 90;
pub const MIN_LEVEL: u8 = 0;
pub const MAX_LEVEL: u8 = 100;
pub const DEFAULT_EXIF_STRIP: u32 = 1;

/// `id` value the service reads as "every image".
pub const ALL_IMAGES_ID: i64 = -1;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const USER_AGENT: &str = concat!("images-compressor-rs/", env!("CARGO_PKG_VERSION"));

// Form field names
pub const FIELD_FILE: &str = "file";
pub const FIELD_LEVEL: &str = "m";
pub const FIELD_EXIF: &str = "exif";
pub const FIELD_KEY: &str = "key";
pub const FIELD_SECRET: &str = "secret";
pub const FIELD_ID: &str = "id";

// Locally synthesized failure messages
pub const MSG_IMAGE_INCORRECT: &str = "Image incorrect!";
pub const MSG_IMAGE_NOT_READABLE: &str = "Image not readable!";
pub const MSG_UNKNOWN_ERROR: &str = "Unknown error occurred";

pub const ENV_API_KEY: &str = "IMAGES_COMPRESSOR_KEY";
pub const ENV_API_SECRET: &str = "IMAGES_COMPRESSOR_SECRET";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const INFO_PREFIX: &str = "📋";
pub const UPLOAD_PREFIX: &str = "📤";
