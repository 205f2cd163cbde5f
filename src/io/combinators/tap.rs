//! Observation nodes.

use futures::future::BoxFuture;

use crate::either::Either;
use crate::io::node::Node;
use crate::io::Io;

/// Peeks at a success by running a probe effect, discarding its outcome.
///
/// The probe is already erased to a unit future by the method that builds
/// this node; whatever it produced, including a failure, is dropped and
/// the original success passes through.
pub(crate) struct Tap<E: 'static, T: 'static, F> {
    pub(crate) inner: Io<E, T>,
    pub(crate) probe: F,
}

impl<E, T, F> Node<E, T> for Tap<E, T, F>
where
    E: Send + 'static,
    T: Send + Sync + 'static,
    F: Fn(&T) -> BoxFuture<'static, ()> + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move {
            match self.inner.eval().await {
                Either::Right(value) => {
                    (self.probe)(&value).await;
                    Either::Right(value)
                }
                failure => failure,
            }
        })
    }
}

/// Peeks at a failure by running a probe effect, discarding its outcome.
pub(crate) struct TapErr<E: 'static, T: 'static, F> {
    pub(crate) inner: Io<E, T>,
    pub(crate) probe: F,
}

impl<E, T, F> Node<E, T> for TapErr<E, T, F>
where
    E: Send + Sync + 'static,
    T: Send + 'static,
    F: Fn(&E) -> BoxFuture<'static, ()> + Send + Sync,
{
    fn eval(&self) -> BoxFuture<'_, Either<E, T>> {
        Box::pin(async move {
            match self.inner.eval().await {
                Either::Left(error) => {
                    (self.probe)(&error).await;
                    Either::Left(error)
                }
                success => success,
            }
        })
    }
}
