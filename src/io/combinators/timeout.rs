//! Deadline enforcement.

use std::time::Duration;

use futures::future::BoxFuture;
use tokio::time::error::Elapsed;

use crate::either::Either;
use crate::io::node::Node;
use crate::io::Io;

/// Races the inner evaluation against a deadline.
///
/// When the deadline elapses the in-flight evaluation is dropped, which
/// cancels it at its next suspension point; the elapsed signal is
/// converted into the effect's own error type. This wrapper is the only
/// combinator that cancels anything.
pub(crate) struct Timeout<E: 'static, T: 'static, F> {
    pub(crate) inner: Io<E, T>,
    pub(crate) after: Duration,
    pub(crate) on_timeout: F,
}

impl<E, T, F> Node<E, T> for Timeout<E, T, F>
where
    E: Send + 'static,
    T: Send + 'static,
    F: Fn(Elapsed) -> E + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move {
            match tokio::time::timeout(self.after, self.inner.eval()).await {
                Ok(outcome) => outcome,
                Err(elapsed) => Either::Left((self.on_timeout)(elapsed)),
            }
        })
    }
}
