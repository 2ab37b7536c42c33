use local_media_protocol::{
    ErrorEnvelope, ERROR_DUPLICATE_TOOL, ERROR_EMPTY_RESULT, ERROR_IO, ERROR_NOT_FOUND,
    ERROR_TIMEOUT, ERROR_UNKNOWN_TOOL,
};
use local_media_resolver::ResolveError;
use rmcp::model::ErrorCode;
use rmcp::ErrorData as McpError;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// JSON-RPC codes for failures without a standard code.
pub const EMPTY_RESULT_CODE: ErrorCode = ErrorCode(-32001);
pub const TIMEOUT_CODE: ErrorCode = ErrorCode(-32003);

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("tool '{name}' is already registered")]
    DuplicateTool { name: String },

    #[error("tool '{name}' timed out after {}ms", timeout.as_millis())]
    Timeout { name: String, timeout: Duration },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl DispatchError {
    pub fn envelope(&self) -> ErrorEnvelope {
        let message = self.to_string();
        match self {
            Self::UnknownTool { name } => ErrorEnvelope::new(ERROR_UNKNOWN_TOOL, message)
                .with_details(json!({ "tool": name }))
                .with_hint("call tools/list for the available tool names"),
            Self::DuplicateTool { name } => ErrorEnvelope::new(ERROR_DUPLICATE_TOOL, message)
                .with_details(json!({ "tool": name })),
            Self::Timeout { name, timeout } => {
                let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                ErrorEnvelope::new(ERROR_TIMEOUT, message)
                    .with_details(json!({ "tool": name, "timeout_ms": timeout_ms }))
            }
            Self::Resolve(err) => {
                let code = match err {
                    ResolveError::NotFound { .. } => ERROR_NOT_FOUND,
                    ResolveError::EmptyResult { .. } => ERROR_EMPTY_RESULT,
                    ResolveError::Io { .. } => ERROR_IO,
                };
                ErrorEnvelope::new(code, message)
                    .with_details(json!({ "path": err.path().to_string_lossy() }))
            }
        }
    }
}

impl From<DispatchError> for McpError {
    fn from(err: DispatchError) -> Self {
        let envelope = err.envelope();
        let data = serde_json::to_value(&envelope).ok();
        let message = envelope.message;

        match err {
            DispatchError::UnknownTool { .. } => McpError::invalid_params(message, data),
            DispatchError::DuplicateTool { .. } => McpError::internal_error(message, data),
            DispatchError::Timeout { .. } => McpError::new(TIMEOUT_CODE, message, data),
            DispatchError::Resolve(ResolveError::NotFound { .. }) => {
                McpError::resource_not_found(message, data)
            }
            DispatchError::Resolve(ResolveError::EmptyResult { .. }) => {
                McpError::new(EMPTY_RESULT_CODE, message, data)
            }
            DispatchError::Resolve(ResolveError::Io { .. }) => {
                McpError::internal_error(message, data)
            }
        }
    }
}
