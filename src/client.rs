use crate::constants::{
    ALL_IMAGES_ID, API_ENDPOINT, CHECK_PATH, DELETE_PATH, FIELD_EXIF, FIELD_FILE, FIELD_ID,
    FIELD_KEY, FIELD_LEVEL, FIELD_SECRET, LIST_PATH, OPTIMIZE_PATH, REQUEST_TIMEOUT, USER_AGENT,
};
use crate::error::Result;
use crate::options::OptimizeOptions;
use crate::request::{ApiRequest, Payload};
use crate::response::ApiResponse;
use crate::transport::{HttpTransport, Transport};
use crate::validation::read_image;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// API key and secret sent with every request, stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub verify_tls: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: API_ENDPOINT.to_string(),
            timeout: REQUEST_TIMEOUT,
            verify_tls: true,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }
}

/// Client for the images-compressor web API.
///
/// Every operation issues at most one blocking POST and never returns an
/// error: local, transport and remote failures all come back as
/// [`ApiResponse::Failure`] unless the service sent a structured error.
///
/// # Example
/// ```no_run
/// use images_compressor::{ApiClient, OptimizeOptions};
///
/// let client = ApiClient::new("app_key", "app_secret").unwrap();
/// let options = OptimizeOptions::new(Some(80), None).unwrap();
/// let response = client.optimize("photo.jpg", &options);
/// println!("{}", response.to_json());
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<T = HttpTransport> {
    credentials: Credentials,
    config: ClientConfig,
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(api_key, api_secret), ClientConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(credentials, config, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(credentials: Credentials, config: ClientConfig, transport: T) -> Self {
        Self {
            credentials,
            config,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Uploads `image_path` for optimization.
    ///
    /// Returns `"Image incorrect!"` or `"Image not readable!"` without
    /// touching the network when the path fails local checks.
    pub fn optimize(&self, image_path: impl AsRef<Path>, options: &OptimizeOptions) -> ApiResponse {
        match self.optimize_request(image_path, options) {
            Ok(request) => self.execute(&request),
            Err(e) => e.into(),
        }
    }

    /// Builds the request [`optimize`](Self::optimize) would send.
    pub fn optimize_request(
        &self,
        image_path: impl AsRef<Path>,
        options: &OptimizeOptions,
    ) -> Result<ApiRequest> {
        let image = read_image(image_path.as_ref())?;

        let payload = Payload::new()
            .file(FIELD_FILE, image)
            .text(FIELD_LEVEL, options.level)
            .text(FIELD_EXIF, options.exif_strip.bits());

        Ok(ApiRequest::new(
            &self.config.endpoint,
            OPTIMIZE_PATH,
            self.signed(payload),
        ))
    }

    /// Validates the credentials with the service.
    pub fn check(&self) -> ApiResponse {
        self.request(CHECK_PATH, self.signed(Payload::new()))
    }

    /// Lists stored images; `None` lists all of them.
    pub fn get(&self, id: Option<i64>) -> ApiResponse {
        self.request(LIST_PATH, self.id_payload(id))
    }

    /// Deletes stored images; `None` targets all of them.
    pub fn delete(&self, id: Option<i64>) -> ApiResponse {
        self.request(DELETE_PATH, self.id_payload(id))
    }

    fn signed(&self, payload: Payload) -> Payload {
        payload
            .text(FIELD_KEY, &self.credentials.key)
            .text(FIELD_SECRET, &self.credentials.secret)
    }

    fn id_payload(&self, id: Option<i64>) -> Payload {
        self.signed(Payload::new())
            .text(FIELD_ID, id.unwrap_or(ALL_IMAGES_ID))
    }

    fn request(&self, path: &str, payload: Payload) -> ApiResponse {
        let request = ApiRequest::new(&self.config.endpoint, path, payload);
        self.execute(&request)
    }

    fn execute(&self, request: &ApiRequest) -> ApiResponse {
        debug!(url = %request.url, multipart = request.payload.is_multipart(), "sending request");

        match self.transport.send(request) {
            Ok(raw) => ApiResponse::from_raw(&raw),
            Err(e) => e.into(),
        }
    }
}
