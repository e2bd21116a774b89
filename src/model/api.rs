use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Coarse error classification reported to callers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum ErrorKind {
    ValidationError,
    NotFoundError,
    FormatError,
    StorageError,
    UploadError,
    /// Misconfiguration or a broken internal invariant, not a caller or storage fault.
    InternalError,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub kind: ErrorKind,
    pub error: String,
}

impl ErrorDto {
    pub fn new(kind: ErrorKind, error: impl Into<String>) -> Self {
        Self {
            success: false,
            kind,
            error: error.into(),
        }
    }
}

/// Success envelope wrapping an operation's payload.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wraps a list and reports its length in `count`.
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count: Some(count),
            message: None,
        }
    }
}

/// Success envelope for operations without a payload.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
