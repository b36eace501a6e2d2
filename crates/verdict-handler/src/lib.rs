//! Failure classification and JSON error responses
//!
//! [`ErrorProcessor`] maps a [`Failure`] to an [`ErrorResponse`].
//! [`ErrorHandler`] wraps it with option defaults and a last-resort
//! fallback, writing the result through a [`ResponseSink`].
//! [`error_middleware`] plugs the handler into an axum router.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod clock;
mod error;
mod handler;
mod hook;
mod middleware;
mod options;
mod processor;
mod sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ProcessError;
pub use handler::ErrorHandler;
pub use hook::{ErrorHook, FnHook, LogFailures, hook_fn};
pub use middleware::error_middleware;
pub use options::HandlerOptions;
pub use processor::ErrorProcessor;
pub use sink::{AxumResponder, ResponseSink};

pub use verdict_config::Environment;
pub use verdict_core::{
    DEFAULT_ERROR, DetailValue, ErrorDetails, ErrorKind, ErrorResponse, Failure, HttpError, HttpFailure, PlainFailure,
};
