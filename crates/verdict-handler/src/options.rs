use std::fmt;
use std::sync::Arc;

use verdict_config::{Environment, ErrorsConfig};

use crate::{ErrorHook, LogFailures};

/// Options for processing a failure
#[derive(Clone, Default)]
pub struct HandlerOptions {
    /// Attach stack traces; unset means "development mode decides"
    pub include_stack: Option<bool>,
    /// Hook awaited before classification
    pub on_error: Option<Arc<dyn ErrorHook>>,
}

impl HandlerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn include_stack(mut self, include_stack: bool) -> Self {
        self.include_stack = Some(include_stack);
        self
    }

    #[must_use]
    pub fn on_error(mut self, hook: impl ErrorHook + 'static) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }

    /// Options described by the `[errors]` config section
    pub fn from_config(config: &ErrorsConfig) -> Self {
        Self {
            include_stack: config.include_stack,
            on_error: config
                .log_failures
                .then(|| Arc::new(LogFailures) as Arc<dyn ErrorHook>),
        }
    }

    /// Fill unset options with the defaults for `environment`
    ///
    /// Explicitly set values win.
    #[must_use]
    pub fn resolve(&self, environment: Environment) -> Self {
        Self {
            include_stack: Some(self.include_stack.unwrap_or(environment.is_development())),
            on_error: self.on_error.clone(),
        }
    }
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("include_stack", &self.include_stack)
            .field("on_error", &self.on_error.as_ref().map(|_| "<hook>"))
            .finish()
    }
}
