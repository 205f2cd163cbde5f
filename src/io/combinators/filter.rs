//! Success-to-failure conversion nodes.

use futures::future::BoxFuture;
use std::convert::Infallible;

use crate::either::Either;
use crate::io::node::Node;
use crate::io::Io;

/// Fails a success that does not satisfy the predicate.
pub(crate) struct FilterOrFail<E: 'static, T: 'static, P, F> {
    pub(crate) inner: Io<E, T>,
    pub(crate) predicate: P,
    pub(crate) or_fail: F,
}

impl<E, T, P, F> Node<E, T> for FilterOrFail<E, T, P, F>
where
    E: Send + 'static,
    T: Send + 'static,
    P: Fn(&T) -> bool + Send + Sync,
    F: Fn(T) -> E + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move {
            match self.inner.eval().await {
                Either::Right(value) if !(self.predicate)(&value) => {
                    Either::Left((self.or_fail)(value))
                }
                other => other,
            }
        })
    }
}

/// Collapses every outcome into a failure.
///
/// Successes are converted through the supplied function; failures pass
/// through. The resulting effect can never produce a value.
pub(crate) struct CoalesceFail<E: 'static, T: 'static, F> {
    pub(crate) inner: Io<E, T>,
    pub(crate) if_success: F,
}

impl<E, T, F> Node<E, Infallible> for CoalesceFail<E, T, F>
where
    E: Send + 'static,
    T: Send + 'static,
    F: Fn(T) -> E + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, Infallible>> {
        Box::pin(async move {
            match self.inner.eval().await {
                Either::Right(value) => Either::Left((self.if_success)(value)),
                Either::Left(error) => Either::Left(error),
            }
        })
    }
}
