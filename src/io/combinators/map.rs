//! Value and error transformation nodes.

use futures::future::BoxFuture;

use crate::either::Either;
use crate::io::node::Node;
use crate::io::Io;

/// Transforms the success value.
pub(crate) struct Map<E: 'static, A: 'static, F> {
    pub(crate) inner: Io<E, A>,
    pub(crate) f: F,
}

impl<E, A, T, F> Node<E, T> for Map<E, A, F>
where
    E: Send + 'static,
    A: Send + 'static,
    T: Send,
    F: Fn(A) -> T + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move { self.inner.eval().await.map(&self.f) })
    }
}

/// Transforms the error value.
pub(crate) struct MapErr<E: 'static, T: 'static, F> {
    pub(crate) inner: Io<E, T>,
    pub(crate) f: F,
}

impl<E, E2, T, F> Node<E2, T> for MapErr<E, T, F>
where
    E: Send + 'static,
    E2: Send,
    T: Send + 'static,
    F: Fn(E) -> E2 + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E2, T>> {
        Box::pin(async move { self.inner.eval().await.map_left(&self.f) })
    }
}
