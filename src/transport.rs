use crate::client::ClientConfig;
use crate::error::{CompressorError, Result};
use crate::request::ApiRequest;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use tracing::debug;

/// Status and undecoded body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a single POST and reports what came back.
///
/// Any HTTP status counts as a completed exchange; only failures to get a
/// response at all (connect, TLS, timeout) are errors.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        (**self).send(request)
    }
}

/// Blocking reqwest transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| {
                CompressorError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        let payload = &request.payload;
        let builder = self.client.post(&request.url);

        let builder = match payload.file_part() {
            Some((name, part)) => {
                let file = Part::bytes(part.bytes.clone()).file_name(part.file_name.clone());
                let form = payload
                    .fields()
                    .iter()
                    .fold(Form::new().part(name.to_string(), file), |form, (k, v)| {
                        form.text(k.clone(), v.clone())
                    });
                builder.multipart(form)
            }
            None => builder.form(payload.fields()),
        };

        let response = builder
            .send()
            .map_err(|e| CompressorError::Transport(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| CompressorError::Transport(format!("Failed to read body: {}", e)))?;

        debug!(url = %request.url, status, bytes = body.len(), "response received");

        Ok(RawResponse { status, body })
    }
}
