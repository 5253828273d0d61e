//! Applications bundled with the adapter.

use std::io::{Read, Write};

use serde_json::json;

use crate::application::Application;
use crate::loader::AppOptions;
use crate::models::environ::Environ;
use crate::models::response::Response;

/// Registered name of the echo application.
pub const ECHO: &str = "aws_lambda_wsgi.apps.echo";

/// Replies with a JSON description of the request it received.
///
/// Useful as a deployment smoke test: point `WSGI_APP` at it and compare the
/// reply with what API Gateway should have sent.
#[derive(Debug, Clone, Copy)]
pub struct Echo {
    debug: bool,
}

#[must_use]
pub fn echo(options: &AppOptions) -> Box<dyn Application> {
    Box::new(Echo {
        debug: options.debug,
    })
}

impl Application for Echo {
    fn call(&self, environ: &mut Environ) -> anyhow::Result<Response> {
        let mut body = Vec::new();
        environ.input.read_to_end(&mut body)?;

        if self.debug {
            writeln!(
                environ.errors,
                "echo: {} {}{} ({} bytes)",
                environ.request_method,
                environ.script_name,
                environ.path_info,
                body.len()
            )?;
        }

        let headers: serde_json::Map<String, serde_json::Value> = environ
            .extensions()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();

        let reply = json!({
            "method": environ.request_method,
            "scriptName": environ.script_name,
            "path": environ.path_info,
            "query": environ.query_string,
            "remoteAddr": environ.remote_addr,
            "remoteUser": environ.remote_user,
            "scheme": environ.url_scheme,
            "headers": headers,
            "bodyLength": body.len(),
        });

        Ok(Response::new(200)
            .with_header("Content-Type", "application/json")
            .with_body(serde_json::to_vec(&reply)?))
    }
}
