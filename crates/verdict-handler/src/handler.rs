use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use verdict_config::Environment;
use verdict_core::{DEFAULT_ERROR, Failure};

use crate::{Clock, ErrorProcessor, HandlerOptions, ProcessError, ResponseSink};

/// Turns any failure into a response on a [`ResponseSink`]
///
/// Never fails: when processing errors out or panics, the fixed
/// [`DEFAULT_ERROR`] body is sent instead.
#[derive(Clone, Debug)]
pub struct ErrorHandler {
    processor: ErrorProcessor,
    options: HandlerOptions,
}

impl ErrorHandler {
    pub fn new(environment: Environment) -> Self {
        Self {
            processor: ErrorProcessor::new(environment),
            options: HandlerOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: HandlerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.processor = self.processor.with_clock(clock);
        self
    }

    pub const fn environment(&self) -> Environment {
        self.processor.environment()
    }

    /// Classify `failure` with the handler's own options and write the
    /// result to `sink`
    pub async fn handle<S: ResponseSink>(&self, failure: &Failure, sink: S) -> S::Output {
        self.handle_with(failure, sink, &self.options).await
    }

    /// Classify `failure` with per-call `options` and write the result to
    /// `sink`
    ///
    /// Unset options take the environment defaults.
    pub async fn handle_with<S: ResponseSink>(
        &self,
        failure: &Failure,
        sink: S,
        options: &HandlerOptions,
    ) -> S::Output {
        let options = options.resolve(self.environment());

        let outcome = AssertUnwindSafe(self.processor.process(failure, &options))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(ProcessError::Panicked(panic_message(&*payload))));

        match outcome {
            Ok(response) => {
                if response.status >= 500 {
                    tracing::warn!(status = response.status, code = %response.code, "sending server error response");
                } else {
                    tracing::debug!(status = response.status, code = %response.code, "sending error response");
                }
                sink.status(response.status_code()).json(&response)
            }
            Err(error) => {
                tracing::error!(error = %error, "failed to process error; sending default response");
                sink.status(DEFAULT_ERROR.status_code()).json(&DEFAULT_ERROR)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}
