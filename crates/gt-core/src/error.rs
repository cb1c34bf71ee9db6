use crate::types::SourceSpan;
use thiserror::Error;

pub const XML_PARSE_ERROR: &str = "XML_PARSE_ERROR";
pub const EVENT_FILE_READ: &str = "EVENT_FILE_READ";
pub const EVENT_NODE_MISSING: &str = "EVENT_NODE_MISSING";
pub const EVENT_DIR_NOT_FOUND: &str = "EVENT_DIR_NOT_FOUND";
pub const EVENT_DIR_NOT_DIR: &str = "EVENT_DIR_NOT_DIR";
pub const EVENT_DIR_EMPTY: &str = "EVENT_DIR_EMPTY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct GtError {
    pub code: String,
    pub message: String,
    pub span: Option<SourceSpan>,
}

impl GtError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(
        code: impl Into<String>,
        message: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            span: Some(span),
        }
    }

    /// Prefixes the message with the file the error came from, keeping code and span.
    pub fn in_file(self, path: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{}: {}", path, self.message),
            ..self
        }
    }
}
