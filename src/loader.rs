//! Resolves the configured application name to an application instance.
//!
//! Applications are registered explicitly by the binary instead of being
//! looked up on a process-wide search path.

use std::collections::BTreeMap;

use lambda_runtime::tracing::info;

use crate::application::Application;
use crate::apps;
use crate::models::error::{AdapterError, AdapterResult};

/// Options handed to an application factory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub debug: bool,
}

/// Builds an application from its options.
pub type AppFactory = fn(&AppOptions) -> Box<dyn Application>;

/// Fully-qualified application names mapped to their factories.
#[derive(Default)]
pub struct AppRegistry {
    factories: BTreeMap<String, AppFactory>,
}

impl AppRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the applications bundled with this crate.
    #[must_use]
    pub fn with_builtin() -> Self {
        Self::new().register(apps::ECHO, apps::echo)
    }

    #[must_use]
    pub fn register(mut self, name: impl Into<String>, factory: AppFactory) -> Self {
        self.factories.insert(name.into(), factory);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Resolves `name` and builds the application with `options`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAppName` if `name` is not of the form `module.attr`,
    /// and `AppNotFound` if nothing is registered under it.
    pub fn load(&self, name: &str, options: &AppOptions) -> AdapterResult<Box<dyn Application>> {
        let (module, attr) =
            split_name(name).ok_or_else(|| AdapterError::InvalidAppName(name.to_string()))?;

        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| AdapterError::AppNotFound(name.to_string()))?;

        info!(module = %module, attr = %attr, debug = options.debug, "Loaded application");
        Ok(factory(options))
    }
}

/// Splits `package.module.attr` into (`package.module`, `attr`).
#[must_use]
pub fn split_name(name: &str) -> Option<(&str, &str)> {
    name.rsplit_once('.')
        .filter(|(module, attr)| !module.is_empty() && !attr.is_empty())
}
