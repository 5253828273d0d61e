//! Schema generator for the proxy event shapes.
//!
//! This binary writes `event_schema.json` describing the API Gateway event
//! the adapter accepts and the event-response it returns.

use std::fs;

fn main() {
    let schemas = aws_lambda_wsgi::schema::event_schemas().unwrap_or_else(|e| {
        eprintln!("Failed to build schema: {e}");
        std::process::exit(1);
    });

    let json = serde_json::to_string_pretty(&schemas).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        std::process::exit(1);
    });

    fs::write("event_schema.json", json).unwrap_or_else(|e| {
        eprintln!("Failed to write event_schema.json: {e}");
        std::process::exit(1);
    });

    println!("✅ Generated event_schema.json");
}
