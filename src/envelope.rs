use serde::{Deserialize, Serialize};

/// Describes the json response format for `GET /`.
///
/// The envelope is internally tagged on `status`, so the success and
/// error payloads appear as sibling keys of the tag.
///
/// # Serialized Example
/// ```
/// # let ser = r#"
/// {
///     "status": "error",
///     "error": {
///         "message": "script execution failed",
///         "details": "file not found"
///     }
/// }
/// # "#;
/// # let deser: file_relay_api::envelope::ResponseEnvelope
/// #    = serde_json::from_str(ser).expect("failed parsing");
/// # assert!(matches!(deser, file_relay_api::envelope::ResponseEnvelope::Error { .. }));
/// ```
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResponseEnvelope {
    Success { data: OutputData },
    Error { error: ErrorInfo },
}

impl ResponseEnvelope {
    /// Wraps file content read by the server.
    #[must_use]
    pub fn success(output: String) -> Self {
        ResponseEnvelope::Success {
            data: OutputData { output },
        }
    }

    /// Wraps a failed read. `details` carries the raw diagnostic text.
    #[must_use]
    pub fn error(message: impl Into<String>, details: Option<String>) -> Self {
        ResponseEnvelope::Error {
            error: ErrorInfo {
                message: message.into(),
                details,
            },
        }
    }
}

/// Successful payload: the file content, verbatim including any
/// trailing newline.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutputData {
    pub output: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
