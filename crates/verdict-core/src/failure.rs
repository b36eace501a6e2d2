use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use http::StatusCode;
use thiserror::Error;

use crate::{ErrorDetails, ErrorKind, HttpError, reason_phrase};

/// Stack trace of the caller, when the runtime has backtraces enabled
fn capture_stack() -> Option<String> {
    let backtrace = Backtrace::capture();
    (backtrace.status() == BacktraceStatus::Captured).then(|| backtrace.to_string())
}

fn message_or_reason(message: String, status: StatusCode) -> String {
    if message.is_empty() {
        reason_phrase(status).to_owned()
    } else {
        message
    }
}

/// Structured HTTP failure raised by application code
///
/// Built through one of the named-kind constructors, or through
/// [`HttpFailure::custom`] for a status/code pair outside the named set.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HttpFailure {
    kind: Option<ErrorKind>,
    status: StatusCode,
    code: Cow<'static, str>,
    message: String,
    details: Option<ErrorDetails>,
    stack: Option<String>,
}

impl HttpFailure {
    /// Failure of a named kind
    ///
    /// An empty message is replaced by the kind's reason phrase.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            status: kind.status(),
            code: Cow::Borrowed(kind.code()),
            message: message_or_reason(message.into(), kind.status()),
            details: None,
            stack: capture_stack(),
        }
    }

    /// Failure with its own status and code
    pub fn custom(status: StatusCode, code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            kind: None,
            status,
            code: code.into(),
            message: message_or_reason(message.into(), status),
            details: None,
            stack: capture_stack(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServer, message)
    }

    #[must_use]
    pub fn with_details(mut self, details: ErrorDetails) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn without_stack(mut self) -> Self {
        self.stack = None;
        self
    }

    /// Named kind, or `None` for a custom failure
    pub const fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn details_ref(&self) -> Option<&ErrorDetails> {
        self.details.as_ref()
    }

    pub fn stack_trace(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

impl From<ErrorKind> for HttpFailure {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, String::new())
    }
}

impl HttpError for HttpFailure {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_code(&self) -> &str {
        &self.code
    }

    fn client_message(&self) -> String {
        self.message.clone()
    }

    fn details(&self) -> Result<Option<ErrorDetails>, Failure> {
        Ok(self.details.clone())
    }

    fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

/// Failure carrying only a message, without HTTP structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PlainFailure {
    message: String,
    stack: Option<String>,
}

impl PlainFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: capture_stack(),
        }
    }

    /// Capture the display message of any error
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        Self::new(error.to_string())
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn without_stack(mut self) -> Self {
        self.stack = None;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

/// Any value raised while handling a request
///
/// The variants are ordered from most to least structured. Named kinds
/// live in [`Failure::Http`]; other types exposing the HTTP capability
/// are wrapped in [`Failure::Structured`].
#[derive(Debug, Clone)]
pub enum Failure {
    /// Failure built by this crate, named kind or custom
    Http(HttpFailure),
    /// Foreign error implementing [`HttpError`]
    Structured(Arc<dyn HttpError + Send + Sync>),
    /// Error with a message but no HTTP structure
    Plain(PlainFailure),
    /// Arbitrary value that is not an error at all, kept in string form
    Thrown(String),
}

impl Failure {
    /// Wrap a foreign [`HttpError`]
    pub fn structured<E>(error: E) -> Self
    where
        E: HttpError + Send + Sync + 'static,
    {
        Self::Structured(Arc::new(error))
    }

    /// Wrap any error as a plain failure
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        Self::Plain(PlainFailure::from_error(error))
    }

    /// Wrap an arbitrary non-error value
    pub fn thrown(value: impl fmt::Display) -> Self {
        Self::Thrown(value.to_string())
    }

    /// Named kind, when this is one of the named variants
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Http(failure) => failure.kind(),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == Some(ErrorKind::Validation)
    }

    pub fn is_bad_request(&self) -> bool {
        self.kind() == Some(ErrorKind::BadRequest)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == Some(ErrorKind::Unauthorized)
    }

    pub fn is_forbidden(&self) -> bool {
        self.kind() == Some(ErrorKind::Forbidden)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }

    pub fn is_internal(&self) -> bool {
        self.kind() == Some(ErrorKind::InternalServer)
    }

    /// Whether the failure exposes the structured HTTP capability
    pub const fn is_http_error(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Structured(_))
    }

    /// The structured HTTP view of this failure, if it has one
    pub fn as_http_error(&self) -> Option<&(dyn HttpError + Send + Sync)> {
        match self {
            Self::Http(failure) => Some(failure),
            Self::Structured(error) => Some(&**error),
            Self::Plain(_) | Self::Thrown(_) => None,
        }
    }

    /// Message of an error-shaped failure
    ///
    /// `None` for thrown values, which are not errors.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Http(failure) => Some(failure.message().to_owned()),
            Self::Structured(error) => Some(error.client_message()),
            Self::Plain(failure) => Some(failure.message().to_owned()),
            Self::Thrown(_) => None,
        }
    }

    /// Stack trace of an error-shaped failure
    pub fn stack(&self) -> Option<&str> {
        match self {
            Self::Http(failure) => failure.stack_trace(),
            Self::Structured(error) => error.stack(),
            Self::Plain(failure) => failure.stack(),
            Self::Thrown(_) => None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(failure) => fmt::Display::fmt(failure, f),
            Self::Structured(error) => fmt::Display::fmt(error, f),
            Self::Plain(failure) => fmt::Display::fmt(failure, f),
            Self::Thrown(value) => f.write_str(value),
        }
    }
}

impl From<HttpFailure> for Failure {
    fn from(failure: HttpFailure) -> Self {
        Self::Http(failure)
    }
}

impl From<PlainFailure> for Failure {
    fn from(failure: PlainFailure) -> Self {
        Self::Plain(failure)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<HttpFailure>() {
            Ok(failure) => Self::Http(failure),
            Err(error) => {
                let backtrace = error.backtrace();
                let mut failure = PlainFailure::new(error.to_string()).without_stack();
                if backtrace.status() == BacktraceStatus::Captured {
                    failure = failure.with_stack(backtrace.to_string());
                }
                Self::Plain(failure)
            }
        }
    }
}

impl From<String> for Failure {
    fn from(value: String) -> Self {
        Self::Thrown(value)
    }
}

impl From<&str> for Failure {
    fn from(value: &str) -> Self {
        Self::Thrown(value.to_owned())
    }
}
