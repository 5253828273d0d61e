//! JSON Schemas for the event shapes the adapter accepts and returns.

use schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};

use crate::models::event::ProxyEvent;
use crate::models::response::EventResponse;

/// Schemas for the inbound proxy event and the outbound event-response.
///
/// # Errors
///
/// Returns an error if a schema cannot be converted to JSON.
pub fn event_schemas() -> serde_json::Result<Value> {
    Ok(json!([
        {
            "name": "ProxyEvent",
            "description": "API Gateway REST proxy event accepted by the adapter.",
            "schema": schema_value::<ProxyEvent>()?,
        },
        {
            "name": "EventResponse",
            "description": "Event-response returned to API Gateway.",
            "schema": schema_value::<EventResponse>()?,
        },
    ]))
}

fn schema_value<T: JsonSchema>() -> serde_json::Result<Value> {
    let mut schema = serde_json::to_value(schema_for!(T))?;
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_schema_requires_method_and_path() {
        let schemas = event_schemas().unwrap();
        let event = &schemas[0]["schema"];

        assert_eq!(schemas[0]["name"], "ProxyEvent");
        assert_eq!(event["type"], "object");
        let required = event["required"].as_array().unwrap();
        assert!(required.contains(&json!("httpMethod")));
        assert!(required.contains(&json!("path")));
        assert!(event["properties"]["queryStringParameters"].is_object());
    }

    #[test]
    fn test_response_schema_properties() {
        let schemas = event_schemas().unwrap();
        let response = &schemas[1]["schema"];

        for field in ["statusCode", "headers", "body"] {
            assert!(
                response["properties"].get(field).is_some(),
                "Missing response field: {field}"
            );
        }
    }
}
