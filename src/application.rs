use crate::models::environ::Environ;
use crate::models::response::Response;

/// A synchronous request handler.
///
/// The adapter calls `call` exactly once per event with a fresh environment.
/// It never calls concurrently from this process and never assumes the
/// process ends after a single call. Anything written to `environ.errors` is
/// forwarded to the operator log after the call returns.
///
/// Closures of the form `Fn(&mut Environ) -> anyhow::Result<Response>`
/// implement this trait.
pub trait Application: Send + Sync {
    /// Handles one request.
    ///
    /// # Errors
    ///
    /// Any error is propagated to the Lambda host as an `ApplicationError`.
    fn call(&self, environ: &mut Environ) -> anyhow::Result<Response>;
}

impl<F> Application for F
where
    F: Fn(&mut Environ) -> anyhow::Result<Response> + Send + Sync,
{
    fn call(&self, environ: &mut Environ) -> anyhow::Result<Response> {
        self(environ)
    }
}
