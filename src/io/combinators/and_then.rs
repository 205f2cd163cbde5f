//! Sequential composition nodes.

use futures::future::BoxFuture;

use crate::either::Either;
use crate::io::node::Node;
use crate::io::Io;

/// Sequential bind: feed the success value into a continuation.
///
/// A failing inner effect short-circuits; the continuation is never
/// invoked.
pub(crate) struct AndThen<E: 'static, A: 'static, F> {
    pub(crate) inner: Io<E, A>,
    pub(crate) f: F,
}

impl<E, A, T, F> Node<E, T> for AndThen<E, A, F>
where
    E: Send + 'static,
    A: Send + 'static,
    T: Send + 'static,
    F: Fn(A) -> Io<E, T> + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move {
            match self.inner.eval().await {
                Either::Left(error) => Either::Left(error),
                Either::Right(value) => {
                    let next = (self.f)(value);
                    next.eval().await
                }
            }
        })
    }
}

/// Error bind: feed the error into a handler producing a fresh effect.
///
/// A succeeding inner effect passes through; the handler is never
/// invoked.
pub(crate) struct Recover<E: 'static, T: 'static, F> {
    pub(crate) inner: Io<E, T>,
    pub(crate) f: F,
}

impl<E, E2, T, F> Node<E2, T> for Recover<E, T, F>
where
    E: Send + 'static,
    E2: Send + 'static,
    T: Send + 'static,
    F: Fn(E) -> Io<E2, T> + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E2, T>> {
        Box::pin(async move {
            match self.inner.eval().await {
                Either::Right(value) => Either::Right(value),
                Either::Left(error) => {
                    let handler = (self.f)(error);
                    handler.eval().await
                }
            }
        })
    }
}
