use crate::constants::{MSG_IMAGE_INCORRECT, MSG_IMAGE_NOT_READABLE, MSG_UNKNOWN_ERROR};
use crate::error::CompressorError;
use crate::transport::RawResponse;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use tracing::warn;

/// Outcome of a client call.
///
/// `Service` bodies are passed through untouched, whatever their shape.
/// `Failure` is produced locally and serializes as
/// `{"success": false, "message": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Service(Value),
    Failure { message: String },
}

impl ApiResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse::Failure {
            message: message.into(),
        }
    }

    pub fn unknown_error() -> Self {
        Self::failure(MSG_UNKNOWN_ERROR)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ApiResponse::Failure { .. })
    }

    /// True for local failures, `null` bodies and service bodies reporting
    /// `"success": false`.
    pub fn is_unsuccessful(&self) -> bool {
        match self {
            ApiResponse::Failure { .. } => true,
            ApiResponse::Service(Value::Null) => true,
            ApiResponse::Service(body) => body.get("success") == Some(&Value::Bool(false)),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ApiResponse::Service(body) => body.clone(),
            ApiResponse::Failure { message } => json!({ "success": false, "message": message }),
        }
    }

    /// Maps a completed HTTP exchange onto a response.
    ///
    /// 200 passes the decoded body through, or `null` when it is not JSON.
    /// Any other status passes the body through only when it carries non-null
    /// `code` and `detail`.
    pub fn from_raw(raw: &RawResponse) -> Self {
        let decoded = serde_json::from_str::<Value>(&raw.body);

        if raw.status == 200 {
            return match decoded {
                Ok(body) => ApiResponse::Service(body),
                Err(e) => {
                    warn!(error = %e, "service returned a body that is not JSON");
                    ApiResponse::Service(Value::Null)
                }
            };
        }

        match decoded {
            Ok(body) if is_service_error(&body) => ApiResponse::Service(body),
            _ => Self::unknown_error(),
        }
    }
}

impl From<CompressorError> for ApiResponse {
    fn from(error: CompressorError) -> Self {
        match error {
            CompressorError::ImageIncorrect(_) => Self::failure(MSG_IMAGE_INCORRECT),
            CompressorError::ImageNotReadable(..) => Self::failure(MSG_IMAGE_NOT_READABLE),
            other => {
                warn!(error = %other, "request failed");
                Self::unknown_error()
            }
        }
    }
}

impl Serialize for ApiResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

fn is_service_error(body: &Value) -> bool {
    let present = |key: &str| matches!(body.get(key), Some(value) if !value.is_null());
    present("code") && present("detail")
}
