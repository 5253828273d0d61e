pub mod environ;
pub mod error;
pub mod event;
pub mod response;

pub use environ::{Environ, ErrorSink, Flags};
pub use error::{AdapterError, AdapterResult};
pub use event::{Authorizer, ProxyEvent, RequestContext};
pub use response::{EventResponse, Response};
