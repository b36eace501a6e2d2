//! Error model for Verdict
//!
//! Named failure kinds, the structured HTTP capability, and the JSON
//! response shape shared by the classifier and the emitter.

#![allow(clippy::must_use_candidate)]

mod details;
mod error;
mod failure;
#[cfg(feature = "axum")]
mod into_response;
mod kind;
mod response;

pub use details::{DetailValue, ErrorDetails};
pub use error::HttpError;
pub use failure::{Failure, HttpFailure, PlainFailure};
pub use kind::{ErrorKind, reason_phrase};
pub use response::{DEFAULT_ERROR, DefaultError, ErrorResponse, codes};
