//! Calls the application once and side-channels its error stream.

use lambda_runtime::tracing::{error, warn};

use crate::application::Application;
use crate::models::environ::Environ;
use crate::models::error::{AdapterError, AdapterResult};
use crate::models::response::Response;

/// Calls `app` with `environ` and logs anything it wrote to the error stream.
///
/// The captured text goes to the operator log only; it never becomes part of
/// the response.
///
/// # Errors
///
/// Returns `AdapterError::Application` if the application fails. The failure
/// is not converted into an HTTP response.
pub fn invoke(app: &dyn Application, environ: Environ) -> AdapterResult<Response> {
    let (result, captured) = call_application(app, environ);

    if let Some(output) = captured {
        warn!(wsgi_errors = %output.trim_end(), "Application wrote to its error stream");
    }

    result.inspect_err(|e| error!(error = %e, "Application failed"))
}

/// Calls `app` and returns its result together with the drained error stream.
///
/// The environment is consumed, so the error sink is read exactly once.
#[must_use]
pub fn call_application(
    app: &dyn Application,
    mut environ: Environ,
) -> (AdapterResult<Response>, Option<String>) {
    let result = app.call(&mut environ).map_err(AdapterError::Application);
    (result, environ.errors.into_output())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::translate_request;
    use serde_json::json;
    use std::io::{Read, Write};

    fn environ() -> Environ {
        translate_request(json!({"httpMethod": "POST", "path": "/echo", "body": "ping"})).unwrap()
    }

    #[test]
    fn test_captures_error_stream() {
        let app = |env: &mut Environ| -> anyhow::Result<Response> {
            writeln!(env.errors, "deprecated parameter")?;
            Ok(Response::text(200, "ok"))
        };

        let (result, captured) = call_application(&app, environ());
        assert_eq!(result.unwrap().body, b"ok");
        assert_eq!(captured.as_deref(), Some("deprecated parameter\n"));
    }

    #[test]
    fn test_silent_application() {
        let app = |env: &mut Environ| -> anyhow::Result<Response> {
            let mut body = Vec::new();
            env.input.read_to_end(&mut body)?;
            Ok(Response::new(200).with_body(body))
        };

        let (result, captured) = call_application(&app, environ());
        assert_eq!(result.unwrap().body, b"ping");
        assert!(captured.is_none());
    }

    #[test]
    fn test_application_error_propagates() {
        let app = |env: &mut Environ| -> anyhow::Result<Response> {
            writeln!(env.errors, "about to fail")?;
            anyhow::bail!("database unavailable")
        };

        let result = invoke(&app, environ());
        match result {
            Err(AdapterError::Application(e)) => {
                assert_eq!(e.to_string(), "database unavailable");
            }
            other => panic!("expected application error, got {other:?}"),
        }
    }
}
