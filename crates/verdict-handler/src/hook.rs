use std::future::Future;

use async_trait::async_trait;
use verdict_core::Failure;

/// Side effect run with the raw failure before it is classified
///
/// The classifier waits for the hook to finish. A hook error aborts
/// classification and the handler falls back to the default response.
#[async_trait]
pub trait ErrorHook: Send + Sync {
    async fn on_error(&self, failure: &Failure) -> anyhow::Result<()>;
}

/// Hook backed by an async closure
pub struct FnHook<F>(F);

/// Build a hook from a closure returning a future
///
/// The future must own what it needs from the failure:
///
/// ```ignore
/// let hook = hook_fn(|failure: &Failure| {
///     let message = failure.to_string();
///     async move { report(message).await }
/// });
/// ```
pub const fn hook_fn<F, Fut>(f: F) -> FnHook<F>
where
    F: Fn(&Failure) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    FnHook(f)
}

#[async_trait]
impl<F, Fut> ErrorHook for FnHook<F>
where
    F: Fn(&Failure) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn on_error(&self, failure: &Failure) -> anyhow::Result<()> {
        (self.0)(failure).await
    }
}

/// Hook that logs every failure
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFailures;

#[async_trait]
impl ErrorHook for LogFailures {
    async fn on_error(&self, failure: &Failure) -> anyhow::Result<()> {
        tracing::info!(kind = ?failure.kind(), error = %failure, "handling request failure");
        Ok(())
    }
}
