//! Error types for the proxy event adapter.
//!
//! Translation and application failures are allowed to end an invocation
//! abnormally. They are reported to the Lambda host as a `Diagnostic` so the
//! platform's own failure and retry handling applies; no synthetic HTTP
//! response is produced for them.

use lambda_runtime::Diagnostic;
use thiserror::Error;

/// Errors raised while adapting a proxy event to an application call.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The inbound event is missing required fields or carries undecodable data.
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    /// The application failed while handling the request.
    #[error("application error: {0:#}")]
    Application(#[source] anyhow::Error),

    /// The event-response could not be serialized.
    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No application name was configured.
    #[error("no application configured (set WSGI_APP or provide a .wsgi_app file)")]
    MissingAppName,

    /// The application name is not of the form `module.attr`.
    #[error("invalid application name: {0:?}")]
    InvalidAppName(String),

    /// No application is registered under the given name.
    #[error("application not found: {0}")]
    AppNotFound(String),
}

impl AdapterError {
    /// Stable label reported as the diagnostic `error_type`.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidEvent(_) => "InvalidEvent",
            Self::Application(_) => "ApplicationError",
            Self::Serialization(_) => "SerializationError",
            Self::MissingAppName | Self::InvalidAppName(_) | Self::AppNotFound(_) => {
                "ConfigurationError"
            }
        }
    }

    /// Converts the error into the diagnostic returned to the Lambda runtime.
    #[must_use]
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic {
            error_type: self.error_type().to_string(),
            error_message: self.to_string(),
        }
    }
}

pub type AdapterResult<T> = Result<T, AdapterError>;
