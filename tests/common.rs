#![allow(dead_code)]

use images_compressor::{
    ApiClient, ApiRequest, ClientConfig, CompressorError, Credentials, RawResponse, Result,
    Transport,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Transport double that records every request and replays a canned outcome.
pub struct FakeTransport {
    outcome: Outcome,
    sent: Mutex<Vec<ApiRequest>>,
}

enum Outcome {
    Respond(u16, String),
    Fail(String),
}

impl FakeTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            outcome: Outcome::Respond(status, body.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Outcome::Fail(message.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        self.sent.lock().unwrap().push(request.clone());
        match &self.outcome {
            Outcome::Respond(status, body) => Ok(RawResponse::new(*status, body.clone())),
            Outcome::Fail(message) => Err(CompressorError::Transport(message.clone())),
        }
    }
}

pub fn test_client(transport: &FakeTransport) -> ApiClient<&FakeTransport> {
    let config = ClientConfig::default().with_endpoint("https://api.test/images-compressor");
    ApiClient::with_transport(Credentials::new("my-key", "my-secret"), config, transport)
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_test_image(temp_dir: &Path, name: &str) -> PathBuf {
    let path = temp_dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"fake jpg data")
        .unwrap();
    path
}

pub fn field_names(request: &ApiRequest) -> Vec<String> {
    request
        .payload
        .fields()
        .iter()
        .map(|(name, _)| name.clone())
        .collect()
}
