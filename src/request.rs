/// Binary content attached to a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Ordered form fields plus an optional file part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    fields: Vec<(String, String)>,
    file: Option<(String, FilePart)>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn file(mut self, name: &str, part: FilePart) -> Self {
        self.file = Some((name.to_string(), part));
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn file_part(&self) -> Option<(&str, &FilePart)> {
        self.file.as_ref().map(|(name, part)| (name.as_str(), part))
    }

    /// Multipart payloads carry a file; everything else goes form-encoded.
    pub fn is_multipart(&self) -> bool {
        self.file.is_some()
    }
}

/// A fully built POST, ready for a [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub payload: Payload,
}

impl ApiRequest {
    pub fn new(endpoint: &str, path: &str, payload: Payload) -> Self {
        Self {
            url: join_url(endpoint, path),
            payload,
        }
    }
}

fn join_url(endpoint: &str, path: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), path)
}
