use std::fmt;
use std::sync::Arc;

use http::StatusCode;
use verdict_config::Environment;
use verdict_core::{
    ErrorDetails, ErrorKind, ErrorResponse, Failure, HttpError, HttpFailure, PlainFailure, codes, reason_phrase,
};

use crate::{Clock, HandlerOptions, ProcessError, SystemClock};

const PARSE_ERROR_MESSAGE: &str = "Could not parse request";
const PARSE_ERROR_FALLBACK: &str = "Parse error";

/// Maps a [`Failure`] to an [`ErrorResponse`]
///
/// Classification depends only on the failure, the options, the clock and
/// the environment the processor was built with. In production, raw
/// messages and stack traces never reach the response.
#[derive(Clone)]
pub struct ErrorProcessor {
    environment: Environment,
    clock: Arc<dyn Clock>,
}

impl ErrorProcessor {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            clock: Arc::new(SystemClock),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Run the `on_error` hook, then classify
    ///
    /// An unset `include_stack` counts as `false`; the handler fills in the
    /// environment default before calling this.
    pub async fn process(&self, failure: &Failure, options: &HandlerOptions) -> Result<ErrorResponse, ProcessError> {
        if let Some(ref hook) = options.on_error {
            hook.on_error(failure).await.map_err(ProcessError::Hook)?;
        }

        Ok(self.classify(failure, options.include_stack.unwrap_or(false)))
    }

    /// Classify without running any hook
    ///
    /// Named kinds are mutually exclusive, so matching on the kind is the
    /// same as testing them in priority order. Anything else with the HTTP
    /// capability uses its own status and code.
    pub fn classify(&self, failure: &Failure, include_stack: bool) -> ErrorResponse {
        let include_stack = include_stack && self.environment.is_development();

        if let Failure::Http(named) = failure
            && let Some(kind) = named.kind()
        {
            return self.named(kind, named, include_stack);
        }

        if let Some(error) = failure.as_http_error() {
            return self.structured(error, include_stack);
        }

        match failure {
            Failure::Plain(plain) => self.plain(plain, include_stack),
            other => self.thrown(&other.to_string()),
        }
    }

    fn named(&self, kind: ErrorKind, failure: &HttpFailure, include_stack: bool) -> ErrorResponse {
        let message = non_empty(failure.message()).unwrap_or_else(|| kind.reason_phrase());

        ErrorResponse::new(kind.status(), kind.code(), message, self.clock.now())
            .with_details(failure.details_ref().cloned())
            .with_stack(stack_if(include_stack, failure.stack_trace()))
    }

    fn structured(&self, error: &dyn HttpError, include_stack: bool) -> ErrorResponse {
        let details = match error.details() {
            Ok(details) => details,
            Err(inner) => return self.parse_error(&inner, include_stack),
        };

        let status = error.status_code();
        let message = error.client_message();
        let message = if message.is_empty() {
            reason_phrase(status).to_owned()
        } else {
            message
        };

        ErrorResponse::new(status, error.error_code(), message, self.clock.now())
            .with_details(details)
            .with_stack(stack_if(include_stack, error.stack()))
    }

    /// Response for a failure whose details could not be read
    fn parse_error(&self, inner: &Failure, include_stack: bool) -> ErrorResponse {
        tracing::debug!(error = %inner, "failed to read failure details");

        let reason = inner
            .message()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| PARSE_ERROR_FALLBACK.to_owned());

        ErrorResponse::new(StatusCode::BAD_REQUEST, codes::PARSE_ERROR, PARSE_ERROR_MESSAGE, self.clock.now())
            .with_details(self.environment.is_development().then(|| ErrorDetails::error(reason)))
            .with_stack(stack_if(include_stack, inner.stack()))
    }

    fn plain(&self, failure: &PlainFailure, include_stack: bool) -> ErrorResponse {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let development = self.environment.is_development();
        let message = if development {
            failure.message()
        } else {
            reason_phrase(status)
        };

        ErrorResponse::new(status, codes::INTERNAL_ERROR, message, self.clock.now())
            .with_details(development.then(|| ErrorDetails::error(failure.message())))
            .with_stack(stack_if(include_stack, failure.stack()))
    }

    fn thrown(&self, value: &str) -> ErrorResponse {
        let status = StatusCode::SERVICE_UNAVAILABLE;
        let development = self.environment.is_development();
        let message = if development { value } else { reason_phrase(status) };

        ErrorResponse::new(status, codes::SERVICE_UNAVAILABLE, message, self.clock.now())
            .with_details(development.then(|| ErrorDetails::error(value)))
    }
}

impl fmt::Debug for ErrorProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorProcessor")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn stack_if(include_stack: bool, stack: Option<&str>) -> Option<String> {
    stack.filter(|_| include_stack).map(str::to_owned)
}
