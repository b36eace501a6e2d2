use thiserror::Error;

/// Errors that escape the classifier
///
/// Classification itself never fails; only the work around it can.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The `on_error` hook returned an error
    #[error("error hook failed: {0}")]
    Hook(#[source] anyhow::Error),

    /// Classification panicked
    #[error("error processor panicked: {0}")]
    Panicked(String),
}
