pub mod cli;
pub mod client;
pub mod constants;
pub mod error;
pub mod logger;
pub mod options;
pub mod request;
pub mod response;
pub mod transport;
pub mod validation;

pub use client::{ApiClient, ClientConfig, Credentials};
pub use error::{CompressorError, Result};
pub use options::{ExifStrip, OptimizeOptions};
pub use request::{ApiRequest, FilePart, Payload};
pub use response::ApiResponse;
pub use transport::{HttpTransport, RawResponse, Transport};
pub use validation::{read_image, validate_image_path};
