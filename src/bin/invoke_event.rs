//! Runs a single proxy event through the adapter.
//!
//! Reads the event JSON from the file named by the first argument, or from
//! stdin when no argument is given, and prints the event-response. The
//! application comes from the usual configuration (`WSGI_APP` or `.wsgi_app`).

use std::io::Read;

use anyhow::{Context, Result};
use aws_lambda_wsgi::config::AdapterConfig;
use aws_lambda_wsgi::handler::handle_event;
use aws_lambda_wsgi::loader::{AppOptions, AppRegistry};
use serde_json::Value;

fn main() -> Result<()> {
    lambda_runtime::tracing::init_default_subscriber();

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read event file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read event from stdin")?;
            buf
        }
    };
    let payload: Value = serde_json::from_str(&text).context("Event is not valid JSON")?;

    let config = AdapterConfig::from_env()?;
    let app = AppRegistry::with_builtin().load(
        &config.app,
        &AppOptions {
            debug: config.debug,
        },
    )?;

    let response = handle_event(app.as_ref(), &config.translator, payload)?;
    serde_json::to_writer_pretty(std::io::stdout().lock(), &response)?;
    println!();
    Ok(())
}
