// Request translation tests
#![allow(clippy::unwrap_used)]

use aws_lambda_wsgi::models::AdapterError;
use aws_lambda_wsgi::translate_request;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::io::Read;

/// Decodes a `k=v&k=v` query string back into a map
fn decode_query(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap();
            (
                urlencoding::decode(k).unwrap().into_owned(),
                urlencoding::decode(v).unwrap().into_owned(),
            )
        })
        .collect()
}

fn event_with_query(query: Value) -> Value {
    json!({
        "httpMethod": "GET",
        "path": "/search",
        "queryStringParameters": query
    })
}

#[test]
fn test_query_string_round_trip() {
    let cases = vec![
        json!({"q": "rust lambda"}),
        json!({"a": "1", "b": "2", "c": "3"}),
        json!({"filter": "name=foo&age>3", "path": "/a/b?c#d"}),
        json!({"emoji": "🦀", "plus": "1+1", "percent": "100%"}),
        json!({"empty": ""}),
    ];

    for query in cases {
        let environ = translate_request(event_with_query(query.clone())).unwrap();
        let decoded = decode_query(&environ.query_string);

        let expected: BTreeMap<String, String> = serde_json::from_value(query).unwrap();
        assert_eq!(decoded, expected, "round trip failed for {}", environ.query_string);
    }
}

#[test]
fn test_absent_and_empty_query_are_empty() {
    let absent = translate_request(json!({"httpMethod": "GET", "path": "/"})).unwrap();
    let null = translate_request(event_with_query(Value::Null)).unwrap();
    let empty = translate_request(event_with_query(json!({}))).unwrap();

    assert_eq!(absent.query_string, "");
    assert_eq!(null.query_string, "");
    assert_eq!(empty.query_string, "");
}

#[test]
fn test_script_name_default_domain() {
    let environ = translate_request(json!({
        "httpMethod": "GET",
        "path": "/users",
        "headers": {"Host": "a1b2c3.execute-api.eu-west-1.amazonaws.com"},
        "requestContext": {"stage": "prod"}
    }))
    .unwrap();

    assert_eq!(environ.script_name, "/prod");
}

#[test]
fn test_script_name_custom_domain() {
    let environ = translate_request(json!({
        "httpMethod": "GET",
        "path": "/users",
        "headers": {"Host": "api.example.com"},
        "requestContext": {"stage": "prod"}
    }))
    .unwrap();

    assert_eq!(environ.script_name, "");
}

#[test]
fn test_remote_addr_first_forwarded_hop() {
    let environ = translate_request(json!({
        "httpMethod": "GET",
        "path": "/",
        "headers": {"X-Forwarded-For": "1.2.3.4, 5.6.7.8"}
    }))
    .unwrap();

    assert_eq!(environ.remote_addr, "1.2.3.4");
}

#[test]
fn test_no_body() {
    let mut environ = translate_request(json!({
        "httpMethod": "GET",
        "path": "/",
        "body": null
    }))
    .unwrap();

    assert_eq!(environ.content_length, "0");
    let mut body = Vec::new();
    environ.input.read_to_end(&mut body).unwrap();
    assert!(body.is_empty());
}

#[test]
fn test_basic_event() {
    let environ = translate_request(json!({
        "httpMethod": "GET",
        "path": "/x",
        "headers": {"Host": "abc.execute-api.amazonaws.com"},
        "requestContext": {"stage": "dev"}
    }))
    .unwrap();

    assert_eq!(environ.get("PATH_INFO"), Some("/x"));
    assert_eq!(environ.get("SCRIPT_NAME"), Some("/dev"));
    assert_eq!(environ.get("REQUEST_METHOD"), Some("GET"));
    assert_eq!(environ.get("SERVER_NAME"), Some("abc.execute-api.amazonaws.com"));
    assert_eq!(environ.get("HTTP_HOST"), Some("abc.execute-api.amazonaws.com"));
}

#[test]
fn test_missing_http_method_is_invalid() {
    let result = translate_request(json!({
        "path": "/x",
        "headers": {"Host": "abc.execute-api.amazonaws.com"},
        "requestContext": {"stage": "dev"}
    }));

    assert!(matches!(result, Err(AdapterError::InvalidEvent(_))));
}

#[test]
fn test_mistyped_http_method_is_invalid() {
    let result = translate_request(json!({"httpMethod": 42, "path": "/"}));
    assert!(matches!(result, Err(AdapterError::InvalidEvent(_))));
}

#[test]
fn test_content_headers_only_in_scalars() {
    let environ = translate_request(json!({
        "httpMethod": "POST",
        "path": "/form",
        "headers": {
            "Content-Type": "application/x-www-form-urlencoded",
            "Content-Length": "7",
            "X-Api-Key": "secret"
        },
        "body": "a=1&b=2"
    }))
    .unwrap();

    assert_eq!(environ.content_type, "application/x-www-form-urlencoded");
    assert_eq!(environ.content_length, "7");
    assert_eq!(environ.get("HTTP_CONTENT_TYPE"), None);
    assert_eq!(environ.get("HTTP_CONTENT_LENGTH"), None);
    assert_eq!(environ.get("HTTP_X_API_KEY"), Some("secret"));
}

#[test]
fn test_remote_user_from_authorizer() {
    let environ = translate_request(json!({
        "httpMethod": "GET",
        "path": "/me",
        "requestContext": {"stage": "prod", "authorizer": {"principalId": "auth0|123"}}
    }))
    .unwrap();

    assert_eq!(environ.remote_user, "auth0|123");
}

#[test]
fn test_binary_body_decoded() {
    let mut environ = translate_request(json!({
        "httpMethod": "POST",
        "path": "/upload",
        "headers": {"Content-Type": "application/octet-stream"},
        "body": "/9j/4AAQ",
        "isBase64Encoded": true
    }))
    .unwrap();

    let mut body = Vec::new();
    environ.input.read_to_end(&mut body).unwrap();
    assert_eq!(body, vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10]);
    assert_eq!(environ.content_length, "6");
}

#[test]
fn test_declared_flags() {
    let environ = translate_request(json!({"httpMethod": "GET", "path": "/"})).unwrap();
    let flags = environ.flags();

    assert!(!flags.multithread);
    assert!(!flags.multiprocess);
    assert!(!flags.run_once);
}
