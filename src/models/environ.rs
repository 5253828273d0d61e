//! Canonical request environment handed to the application.
//!
//! An `Environ` is built fresh for every invocation, lent to the application
//! for exactly one call and then dropped. Nothing in it outlives the call.

use std::collections::BTreeMap;
use std::io::{self, Cursor, Write};

/// Environment protocol version advertised to the application.
pub const VERSION: (u8, u8) = (1, 0);

/// Header-derived keys that are carried only by scalar fields.
const RESERVED_KEYS: [&str; 2] = ["HTTP_CONTENT_TYPE", "HTTP_CONTENT_LENGTH"];

/// Concurrency assumptions the environment declares to the application.
///
/// The adapter calls the application once per event, sequentially, in a
/// process that is reused across invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags {
    pub multithread: bool,
    pub multiprocess: bool,
    pub run_once: bool,
}

/// In-memory sink the application writes diagnostics to.
#[derive(Debug, Default)]
pub struct ErrorSink {
    buf: Vec<u8>,
}

impl ErrorSink {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the sink, returning its text if anything was written.
    #[must_use]
    pub fn into_output(self) -> Option<String> {
        if self.buf.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&self.buf).into_owned())
        }
    }
}

impl Write for ErrorSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Normalizes a header name into its extension key: `X-Api-Key` → `HTTP_X_API_KEY`.
#[must_use]
pub fn extension_key(header_name: &str) -> String {
    format!("HTTP_{}", header_name.to_ascii_uppercase().replace('-', "_"))
}

/// The canonical request environment.
#[derive(Debug)]
pub struct Environ {
    pub content_length: String,
    pub content_type: String,
    pub path_info: String,
    pub query_string: String,
    pub remote_addr: String,
    pub remote_user: String,
    pub request_method: String,
    pub script_name: String,
    pub server_name: String,
    pub server_port: String,
    pub server_protocol: String,
    pub url_scheme: String,
    /// Decoded request body, positioned at the start.
    pub input: Cursor<Vec<u8>>,
    /// Error-capture sink, drained once after the application returns.
    pub errors: ErrorSink,
    extensions: BTreeMap<String, String>,
}

impl Environ {
    /// Creates an environment with the given body and every scalar field empty.
    pub(crate) fn with_body(body: Vec<u8>) -> Self {
        Self {
            content_length: String::new(),
            content_type: String::new(),
            path_info: String::new(),
            query_string: String::new(),
            remote_addr: String::new(),
            remote_user: String::new(),
            request_method: String::new(),
            script_name: String::new(),
            server_name: String::new(),
            server_port: String::new(),
            server_protocol: String::new(),
            url_scheme: String::new(),
            input: Cursor::new(body),
            errors: ErrorSink::default(),
            extensions: BTreeMap::new(),
        }
    }

    /// Re-exposes an inbound header as an extension field.
    ///
    /// Headers normalizing to `HTTP_CONTENT_TYPE` or `HTTP_CONTENT_LENGTH` are
    /// skipped. A later header normalizing to an existing key replaces it.
    pub(crate) fn insert_header(&mut self, name: &str, value: &str) {
        let key = extension_key(name);
        if !RESERVED_KEYS.contains(&key.as_str()) {
            self.extensions.insert(key, value.to_string());
        }
    }

    #[must_use]
    pub const fn flags(&self) -> Flags {
        Flags {
            multithread: false,
            multiprocess: false,
            run_once: false,
        }
    }

    #[must_use]
    pub const fn version(&self) -> (u8, u8) {
        VERSION
    }

    /// Looks up a field by its canonical key, e.g. `PATH_INFO`,
    /// `wsgi.url_scheme` or `HTTP_ACCEPT`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let scalar = match key {
            "CONTENT_LENGTH" => &self.content_length,
            "CONTENT_TYPE" => &self.content_type,
            "PATH_INFO" => &self.path_info,
            "QUERY_STRING" => &self.query_string,
            "REMOTE_ADDR" => &self.remote_addr,
            "REMOTE_USER" => &self.remote_user,
            "REQUEST_METHOD" => &self.request_method,
            "SCRIPT_NAME" => &self.script_name,
            "SERVER_NAME" => &self.server_name,
            "SERVER_PORT" => &self.server_port,
            "SERVER_PROTOCOL" => &self.server_protocol,
            "wsgi.url_scheme" => &self.url_scheme,
            _ => return self.extensions.get(key).map(String::as_str),
        };
        Some(scalar.as_str())
    }

    /// Looks up an extension field by the original header name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.extensions
            .get(&extension_key(name))
            .map(String::as_str)
    }

    /// Extension fields in key order.
    pub fn extensions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extensions.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
