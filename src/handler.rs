use lambda_runtime::tracing::{debug, error, info};
use lambda_runtime::{Diagnostic, LambdaEvent};
use serde_json::Value;

use crate::application::Application;
use crate::config::TranslatorConfig;
use crate::invoker::invoke;
use crate::models::error::AdapterResult;
use crate::models::response::EventResponse;
use crate::request::translate_request_with;
use crate::response::translate_response;

/// Runs one proxy event through the application.
///
/// event → environment → application → event-response. Nothing is kept
/// between calls.
///
/// # Errors
///
/// Returns `InvalidEvent` for a malformed event and `Application` when the
/// application fails.
pub fn handle_event(
    app: &dyn Application,
    config: &TranslatorConfig,
    payload: Value,
) -> AdapterResult<EventResponse> {
    let environ = translate_request_with(config, payload)?;
    info!(
        method = %environ.request_method,
        path = %environ.path_info,
        "Invoking application"
    );

    let response = invoke(app, environ)?;
    let event_response = translate_response(response);

    info!(status = event_response.status_code, "Application responded");
    Ok(event_response)
}

/// Lambda event handler for API Gateway proxy events.
/// Logs the full event when `RUST_LOG=debug/trace`, only method and path otherwise.
///
/// # Errors
///
/// Returns a `Diagnostic` error with one of the following types:
///
/// - `InvalidEvent`: The payload is not a well-formed proxy event
/// - `ApplicationError`: The application failed while handling the request
/// - `SerializationError`: The event-response could not be serialized
pub async fn function_handler(
    app: &dyn Application,
    config: &TranslatorConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Diagnostic> {
    let (payload, context) = event.into_parts();
    debug!(request_id = %context.request_id, payload = ?payload, "Received event");

    handle_event(app, config, payload)
        .and_then(|response| serde_json::to_value(response).map_err(Into::into))
        .map_err(|e| {
            error!(error = %e, error_type = e.error_type(), "Invocation failed");
            e.into_diagnostic()
        })
}
