//! Runs a synchronous request/response application behind AWS Lambda.
//!
//! API Gateway delivers each HTTP request as a JSON "proxy event". This crate
//! translates the event into a canonical request environment, calls the
//! application once, and translates its response back into the event-response
//! record API Gateway expects.

pub mod application;
pub mod apps;
pub mod config;
pub mod handler;
pub mod invoker;
pub mod loader;
pub mod models;
pub mod request;
pub mod response;
pub mod schema;

pub use application::Application;
pub use handler::{function_handler, handle_event};
pub use invoker::invoke;
pub use request::translate_request;
pub use response::translate_response;
